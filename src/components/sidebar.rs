//! Sidebar Navigation
//!
//! Dashboard section switcher with the signed-in user and sign-out.

use leptos::prelude::*;

use crate::context::{AppContext, Section};
use crate::session::use_session;

const SECTIONS: &[(Section, &str)] = &[
    (Section::Overview, "Overview"),
    (Section::Celebrations, "Celebrations"),
    (Section::People, "People"),
    (Section::Upload, "Upload data"),
    (Section::Messages, "Messages"),
];

#[component]
pub fn Sidebar(#[prop(into)] on_sign_out: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Jubilee"</div>
            <nav class="sidebar-nav">
                {SECTIONS.iter().map(|(section, label)| {
                    let target = *section;
                    let is_active = move || ctx.section.get() == target;
                    view! {
                        <button
                            class=move || if is_active() { "sidebar-link active" } else { "sidebar-link" }
                            on:click=move |_| ctx.go_to(target)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </nav>
            <div class="sidebar-footer">
                {move || session.user().map(|user| view! {
                    <span class="sidebar-user">{user.username}</span>
                })}
                <button class="sidebar-signout" on:click=move |_| on_sign_out.run(())>
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}
