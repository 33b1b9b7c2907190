//! Music sheet page demonstrating two ways of navigating home.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;
use crate::util::nav;

/// Music sheet page — static copy plus two controls that both return to the
/// home route.
///
/// The first control is a router link: an in-app transition with no page
/// reload. The second assigns the browser location directly, causing a full
/// reload that discards in-memory application state. Both are fire-and-forget;
/// an invalid destination would surface the router's own not-found fallback.
#[component]
pub fn MusicSheetPage() -> impl IntoView {
    // Full browser navigation, bypassing the client-side router. The closure
    // is created once per mount, so its identity is stable across renders.
    let go_home_dom = move |_| nav::assign(routes::HOME);

    view! {
        <main class="music-sheet-page">
            <h1>"Music Sheet"</h1>
            <p>"This is the /musicSheet page."</p>

            <div class="music-sheet-page__nav">
                <A href={routes::HOME} {..} class="btn">
                    "Go to Home (framework link)"
                </A>
                <button type="button" class="btn" on:click=go_home_dom>
                    "Go to Home (DOM)"
                </button>
            </div>
        </main>
    }
}
