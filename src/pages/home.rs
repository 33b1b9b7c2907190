//! Home page with links into the rest of the application.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

/// Home page — landing view with a link to the music sheet page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <h1>"Home"</h1>
            <p>"Welcome. Pick a page to visit."</p>
            <A href={routes::MUSIC_SHEET} {..} class="btn">
                "Music Sheet"
            </A>
        </main>
    }
}
