use leptos::prelude::*;

#[component]
pub(super) fn LoginView() -> impl IntoView {
    view! {
        <main class="app-main" data-view="login">
            <h1>"Sign in"</h1>
        </main>
    }
}

#[component]
pub(super) fn ProfileView() -> impl IntoView {
    view! {
        <main class="app-main" data-view="profile">
            <h1>"Profile"</h1>
        </main>
    }
}
