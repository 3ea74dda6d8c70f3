//! Landing page with entry points to registration and login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let to_register = {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| navigate("/register", NavigateOptions::default())
    };
    let to_login = move |_: leptos::ev::MouseEvent| navigate("/login", NavigateOptions::default());

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Welcome Home!"</h1>
            </header>
            <main class="home-page__main">
                <p class="home-page__banner">
                    "You are successfully logged in. Explore your dashboard or profile."
                </p>
                <div class="home-page__actions">
                    <button class="nav-button nav-button--register" type="button" on:click=to_register>
                        "Register"
                    </button>
                    <button class="nav-button nav-button--login" type="button" on:click=to_login>
                        "Login"
                    </button>
                </div>
            </main>
        </div>
    }
}
