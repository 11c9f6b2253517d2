//! Top bar of the signed-in console.

use leptos::prelude::*;

/// Brand, signed-in identity, and the logout button.
///
/// `on_logout` runs once per click and is the only way out of the dashboard.
#[component]
pub fn AppHeader(email: String, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header__inner">
                <div class="brand">
                    <span class="brand__mark"></span>
                    <h1 class="brand__name">"Ultramed"</h1>
                </div>
                <div class="app-header__actions">
                    <span class="app-header__user" title="Signed in as">
                        {email}
                    </span>
                    <button class="app-header__logout" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}
