//! Site header: navigation plus the session-dependent controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts the four session-dependent UI regions (login control, register
//! control, user menu, profile control). Each region's display style is
//! bound to the pure visibility decision from `state::session`, so the
//! header re-renders synchronously with every session mutation and never
//! drifts from it. Regions are independently optional: pages that omit
//! the header simply have nothing to toggle.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::state::ui::{AuthModal, UiState};

/// Fallback avatar for accounts without a selected one.
pub const DEFAULT_AVATAR: &str = "/static/img/avatars/avatar1.jpg";

/// CSS `display` value for a region: its visible style, or `none`.
fn display_value(visible: bool, shown: &'static str) -> &'static str {
    if visible { shown } else { "none" }
}

/// Top-of-page header with logo, navigation, and auth controls.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let visibility = move || session.with(|s| s.visibility());

    let display_name = move || {
        session.with(|s| {
            s.user()
                .map(|user| user.display_name().to_owned())
                .unwrap_or_default()
        })
    };
    let avatar_src = move || {
        session.with(|s| {
            s.user()
                .and_then(|user| user.avatar.clone())
                .unwrap_or_else(|| DEFAULT_AVATAR.to_owned())
        })
    };

    let open_login = move |_| {
        ui.update(|state| {
            state.open_modal = Some(AuthModal::Login);
            state.mobile_menu_open = false;
        });
    };
    let open_register = move |_| {
        ui.update(|state| {
            state.open_modal = Some(AuthModal::Register);
            state.mobile_menu_open = false;
        });
    };
    let toggle_menu = move |_| ui.update(|state| state.mobile_menu_open = !state.mobile_menu_open);

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        session.update(|s| {
            s.logout(|target| {
                #[cfg(feature = "hydrate")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(target);
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = target;
                }
            });
        });
    };

    view! {
        <header class="site-header" id="header">
            <a class="site-header__logo" href="/">"SkillForge"</a>
            <button class="site-header__menu-btn" id="mobileMenuBtn" on:click=toggle_menu>
                "\u{2630}"
            </button>
            <nav
                class="site-header__nav"
                class=("site-header__nav--open", move || ui.get().mobile_menu_open)
            >
                <a href="/#courses">"Courses"</a>
                <a href="/#leaderboard">"Leaderboard"</a>
            </nav>
            <div class="site-header__auth">
                <button
                    class="btn btn--ghost"
                    id="loginBtn"
                    style:display=move || display_value(visibility().login_control, "inline-block")
                    on:click=open_login
                >
                    "Sign in"
                </button>
                <button
                    class="btn btn--primary"
                    id="registerBtn"
                    style:display=move || display_value(visibility().register_control, "inline-block")
                    on:click=open_register
                >
                    "Join"
                </button>
                <a
                    class="btn btn--ghost"
                    id="profileBtn"
                    href="/profile"
                    style:display=move || display_value(visibility().profile_control, "inline-block")
                >
                    "Profile"
                </a>
                <div
                    class="user-menu"
                    id="userMenu"
                    style:display=move || display_value(visibility().user_menu, "flex")
                >
                    <img
                        class="user-menu__avatar"
                        id="userAvatar"
                        src=avatar_src
                        alt=display_name
                    />
                    <span class="user-menu__nickname" id="userNickname">{display_name}</span>
                    <a href="#" class="user-menu__logout" id="logoutBtn" on:click=on_logout>
                        "Log out"
                    </a>
                </div>
            </div>
        </header>
    }
}
