//! Login page collecting an email and password.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the session gate while no operator is signed in. Credentials
//! are not verified anywhere; a well-formed submission is handed to the gate
//! as a `User` and the gate switches to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::{User, UserError};

/// Check login form fields and build the user record to sign in with.
///
/// # Errors
///
/// Returns the message to show under the form when a field is missing or the
/// email has no `@`.
pub fn validate_login_input(email: &str, password: &str) -> Result<User, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    // Blank input already returned above, so this mapping is unreachable in practice.
    User::new(email).map_err(|UserError::MissingIdentifier| "Enter your email address.")
}

/// Login page: runs `on_login` with the submitted user once the form validates.
#[component]
pub fn LoginPage(on_login: Callback<User>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&email.get(), &password.get()) {
            Ok(user) => {
                info.set(String::new());
                password.set(String::new());
                on_login.run(user);
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="brand brand--large">
                    <span class="brand__mark"></span>
                    <h1 class="brand__name">"Ultramed"</h1>
                </div>
                <p class="login-card__subtitle">"Sign in to your clinic"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@clinic.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
