//! Login and registration modal forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both modals drive the session manager: a successful exchange stores
//! the token, closes the modal, and refreshes the cached user summary.
//! Every failure path ends in one toast; nothing here throws.

#[cfg(test)]
#[path = "auth_modals_test.rs"]
mod auth_modals_test;

use leptos::prelude::*;

use crate::net::types::{LoginCredentials, RegisterForm, Role};
use crate::state::notify::{NotifyState, toast_error, toast_success};
use crate::state::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::state::session::UserSummary;
use crate::state::ui::{AuthModal, UiState};

/// Trim and require both login fields.
fn validate_login_input(
    username: &str,
    password: &str,
) -> Result<LoginCredentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both login and password.");
    }
    Ok(LoginCredentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Trim and assemble the registration payload.
///
/// With the privileged section open, the selected role applies and its
/// access code is required; otherwise the account registers as a student
/// and no code is sent.
fn validate_register_input(
    nickname: &str,
    login: &str,
    email: &str,
    password: &str,
    privileged: bool,
    role_value: &str,
    access_code: &str,
) -> Result<RegisterForm, &'static str> {
    let nickname = nickname.trim();
    let login = login.trim();
    let email = email.trim();
    if nickname.is_empty() || login.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    let (role, access_code) = if privileged {
        let code = access_code.trim();
        if code.is_empty() {
            return Err("Enter the access code for the selected role.");
        }
        (Role::from_form_value(role_value), Some(code.to_owned()))
    } else {
        (Role::Student, None)
    };
    Ok(RegisterForm {
        nickname: nickname.to_owned(),
        login: login.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role,
        access_code,
    })
}

/// Modal with the sign-in form.
#[component]
pub fn LoginModal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sink = use_context::<RwSignal<NotifyState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let close = move || {
        ui.update(|state| state.open_modal = None);
        password.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                toast_error(sink, message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&credentials).await {
                Ok(tokens) => {
                    session.update(|s| s.complete_login(&tokens));
                    close();
                    toast_success(sink, "Signed in successfully!");
                    if let Some(user) =
                        crate::net::api::fetch_current_user(Some(&tokens.access_token)).await
                    {
                        session.update(|s| s.set_user(UserSummary::from_user(&user)));
                    }
                }
                Err(err) => toast_error(sink, &err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <Show when=move || ui.get().open_modal == Some(AuthModal::Login)>
            <div class="modal" id="loginModal" on:click=move |_| close()>
                <div class="modal__card" on:click=|ev| ev.stop_propagation()>
                    <button class="modal__close" id="closeLoginModal" on:click=move |_| close()>
                        "\u{d7}"
                    </button>
                    <h2>"Sign in"</h2>
                    <form class="auth-form" id="loginForm" on:submit=on_submit>
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Login or email"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Modal with the registration form, including the privileged-role
/// section hidden behind the "Not a student?" toggle.
#[component]
pub fn RegisterModal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sink = use_context::<RwSignal<NotifyState>>();

    let nickname = RwSignal::new(String::new());
    let login_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role_value = RwSignal::new("teacher".to_owned());
    let access_code = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let close = move || {
        ui.update(|state| {
            state.open_modal = None;
            state.privileged_signup = false;
        });
        password.set(String::new());
        access_code.set(String::new());
    };

    let toggle_privileged = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|state| state.privileged_signup = !state.privileged_signup);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_register_input(
            &nickname.get(),
            &login_name.get(),
            &email.get(),
            &password.get(),
            ui.get().privileged_signup,
            &role_value.get(),
            &access_code.get(),
        ) {
            Ok(form) => form,
            Err(message) => {
                toast_error(sink, message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&form).await {
                Ok(message) => {
                    toast_success(sink, &message);
                    // Establish the session right away with the same credentials.
                    let credentials = LoginCredentials {
                        username: form.login.clone(),
                        password: form.password.clone(),
                    };
                    match crate::net::api::login(&credentials).await {
                        Ok(tokens) => {
                            session.update(|s| s.complete_login(&tokens));
                            close();
                            if let Some(user) =
                                crate::net::api::fetch_current_user(Some(&tokens.access_token))
                                    .await
                            {
                                session.update(|s| s.set_user(UserSummary::from_user(&user)));
                            }
                        }
                        Err(err) => toast_error(sink, &err.to_string()),
                    }
                }
                Err(err) => toast_error(sink, &err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            busy.set(false);
        }
    };

    view! {
        <Show when=move || ui.get().open_modal == Some(AuthModal::Register)>
            <div class="modal" id="registerModal" on:click=move |_| close()>
                <div class="modal__card" on:click=|ev| ev.stop_propagation()>
                    <button class="modal__close" id="closeRegisterModal" on:click=move |_| close()>
                        "\u{d7}"
                    </button>
                    <h2>"Join SkillForge"</h2>
                    <form class="auth-form" id="registerForm" on:submit=on_submit>
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Nickname"
                            prop:value=move || nickname.get()
                            on:input=move |ev| nickname.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Login"
                            prop:value=move || login_name.get()
                            on:input=move |ev| login_name.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <a href="#" class="auth-form__toggle" id="toggleAdminBtn" on:click=toggle_privileged>
                            {move || {
                                if ui.get().privileged_signup { "I am a student" } else { "Not a student?" }
                            }}
                        </a>
                        <Show when=move || ui.get().privileged_signup>
                            <div class="auth-form__privileged" id="adminSection">
                                <select
                                    class="auth-form__input"
                                    id="userRole"
                                    prop:value=move || role_value.get()
                                    on:change=move |ev| role_value.set(event_target_value(&ev))
                                >
                                    <option value="teacher">"Teacher"</option>
                                    <option value="admin">"Administrator"</option>
                                </select>
                                <input
                                    class="auth-form__input"
                                    id="secretCode"
                                    type="password"
                                    placeholder="Access code"
                                    prop:value=move || access_code.get()
                                    on:input=move |ev| access_code.set(event_target_value(&ev))
                                />
                            </div>
                        </Show>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating account..." } else { "Create account" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
