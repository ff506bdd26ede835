//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::blog::BlogState;
use crate::state::episodes::EpisodesState;

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let episodes = RwSignal::new(EpisodesState::default());
    let blog = RwSignal::new(BlogState::default());

    provide_context(episodes);
    provide_context(blog);

    view! {
        <Stylesheet id="leptos" href="/pkg/daysgrimm.css"/>
        <Title text="The Days Grimm Podcast"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
