//! Profile page for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated route. Signed-out visitors are redirected to the
//! entry page; signed-in ones get a fresh current-user fetch, which also
//! refreshes the cached summary the header renders from.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::DEFAULT_AVATAR;
use crate::net::types::{Role, User};
use crate::state::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::state::session::UserSummary;

/// Human label for an account role.
fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "Member",
        Role::Student => "Student",
        Role::Teacher => "Teacher",
        Role::Admin => "Administrator",
    }
}

/// Profile screen with identity card.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();

    // Signed-out visitors have no profile; send them to the entry page.
    Effect::new(move || {
        if !session.with(|s| s.is_logged_in()) {
            navigate("/", NavigateOptions::default());
        }
    });

    let profile = RwSignal::new(None::<User>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let token = session.with_untracked(|s| s.token().map(ToOwned::to_owned));
            let fetched = crate::net::api::fetch_current_user(token.as_deref()).await;
            if let Some(user) = &fetched {
                session.update(|s| s.set_user(UserSummary::from_user(user)));
            }
            profile.set(fetched);
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        loading.set(false);
    }

    view! {
        <section class="profile">
            <h1>"Operator profile"</h1>
            <Show when=move || loading.get()>
                <p class="profile__status">"Loading profile..."</p>
            </Show>
            <Show when=move || !loading.get() && profile.get().is_none()>
                <p class="profile__status">"Profile is unavailable right now."</p>
            </Show>
            {move || {
                profile
                    .get()
                    .map(|user| {
                        let avatar = user.avatar.clone().unwrap_or_else(|| DEFAULT_AVATAR.to_owned());
                        view! {
                            <div class="profile__card">
                                <img class="profile__avatar" src=avatar alt=user.nickname.clone()/>
                                <h2 class="profile__nickname">{user.nickname.clone()}</h2>
                                <p class="profile__login">{format!("@{}", user.login)}</p>
                                {user.email.clone().map(|email| view! { <p class="profile__email">{email}</p> })}
                                <span class="profile__role">{role_label(user.role)}</span>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
