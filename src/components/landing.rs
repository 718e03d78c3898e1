//! Landing Screen
//!
//! Public entry point: product header, the AI wish generator and the path
//! into the app.

use leptos::prelude::*;

use crate::components::WishGenerator;
use crate::session::use_session;

#[component]
pub fn LandingScreen(
    #[prop(into)] on_sign_in: Callback<()>,
    #[prop(into)] on_register: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="landing">
            <header class="landing-header">
                <div class="landing-brand">"Jubilee"</div>
                <div class="landing-actions">
                    <button class="btn secondary" on:click=move |_| on_sign_in.run(())>
                        "Sign in"
                    </button>
                    <button class="btn primary" on:click=move |_| on_register.run(())>
                        "Get started"
                    </button>
                </div>
            </header>

            <section class="landing-hero">
                <h1>"Never miss a celebration again"</h1>
                <p>
                    "Track birthdays and anniversaries for your whole organization, "
                    "import them in bulk and let the reminders take care of themselves."
                </p>
            </section>

            <WishGenerator />

            <footer class="landing-footer">
                {move || if session.is_authenticated() {
                    "Welcome back!"
                } else {
                    "Free to try. Import your people in minutes."
                }}
            </footer>
        </div>
    }
}
