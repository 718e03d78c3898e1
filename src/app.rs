//! Jubilee Frontend App
//!
//! Root component: session bootstrap, top-level screen switching and the
//! dashboard shell.

use leptos::prelude::*;

use crate::components::{
    CelebrationsView, LandingScreen, LoginForm, MessagesView, OverviewView, PeopleView,
    RegisterForm, Sidebar, ToastHost, Toaster, UploadView,
};
use crate::context::{AppContext, Section};
use crate::session::{use_session, Session};
use crate::store::{AppState, AppStore};

/// Top-level screens outside the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Landing,
    Login,
    Register,
    Dashboard,
}

#[component]
pub fn App() -> impl IntoView {
    let session = Session::restore();
    let initial = if session.is_authenticated() {
        Screen::Dashboard
    } else {
        Screen::Landing
    };
    let (screen, set_screen) = signal(initial);
    let (section, set_section) = signal(Section::Overview);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(session);
    provide_context(Toaster::new());
    provide_context(AppContext::new(
        (section, set_section),
        (reload_trigger, set_reload_trigger),
    ));
    provide_context(AppStore::new(AppState::new()));

    // A mid-session 401 expires the session; land back on the login screen.
    Effect::new(move |_| {
        if !session.is_authenticated() && screen.get_untracked() == Screen::Dashboard {
            set_screen.set(Screen::Login);
        }
    });

    view! {
        <ToastHost />
        {move || match screen.get() {
            Screen::Landing => view! {
                <LandingScreen
                    on_sign_in=move || set_screen.set(Screen::Login)
                    on_register=move || set_screen.set(Screen::Register)
                />
            }.into_any(),
            Screen::Login => view! {
                <LoginForm
                    on_authenticated=move || set_screen.set(Screen::Dashboard)
                    on_register=move || set_screen.set(Screen::Register)
                />
            }.into_any(),
            Screen::Register => view! {
                <RegisterForm
                    on_authenticated=move || set_screen.set(Screen::Dashboard)
                    on_sign_in=move || set_screen.set(Screen::Login)
                />
            }.into_any(),
            Screen::Dashboard => view! {
                <DashboardShell on_sign_out=move || set_screen.set(Screen::Landing) />
            }.into_any(),
        }}
    }
}

/// Authenticated shell: sidebar plus the active section.
#[component]
fn DashboardShell(#[prop(into)] on_sign_out: Callback<()>) -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let sign_out = move || {
        session.expire();
        on_sign_out.run(());
    };

    view! {
        <div class="app-layout">
            <Sidebar on_sign_out=sign_out />
            <main class="main-content">
                {move || match ctx.section.get() {
                    Section::Overview => view! { <OverviewView /> }.into_any(),
                    Section::Celebrations => view! { <CelebrationsView /> }.into_any(),
                    Section::People => view! { <PeopleView /> }.into_any(),
                    Section::Upload => view! { <UploadView /> }.into_any(),
                    Section::Messages => view! { <MessagesView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
