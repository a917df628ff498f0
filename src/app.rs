//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_modals::{LoginModal, RegisterModal};
use crate::components::header::SiteHeader;
use crate::components::notification::NotificationStack;
use crate::pages::{home::HomePage, profile::ProfilePage};
use crate::state::notify::NotifyState;
use crate::state::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::state::session::UserSummary;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store (restored from browser storage), the toast
/// queue, and transient UI state, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new(Arc::new(BrowserStorage)));
    let ui = RwSignal::new(UiState::default());
    let notify = RwSignal::new(NotifyState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(notify);

    // Refresh the cached display summary once per load; with no stored
    // token the fetch short-circuits without touching the network.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let token = session.with_untracked(|s| s.token().map(ToOwned::to_owned));
            if let Some(user) = crate::net::api::fetch_current_user(token.as_deref()).await {
                session.update(|s| s.set_user(UserSummary::from_user(&user)));
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/skillforge.css"/>
        <Title text="SkillForge"/>

        <Router>
            <SiteHeader/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
            <LoginModal/>
            <RegisterModal/>
            <NotificationStack/>
        </Router>
    }
}
