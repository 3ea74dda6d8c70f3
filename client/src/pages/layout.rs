//! Shared parent route: page outlet plus the toast stack.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::toast_host::ToastHost;

#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Outlet/>
            <ToastHost/>
        </div>
    }
}
