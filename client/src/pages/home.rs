//! Landing page: hero, episodes section, blog feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the fetch kickoff. Each section's state starts `Idle`;
//! on mount an effect flips it to `Loading` and issues exactly one gateway
//! call. Failures land in `Failed` with a static message and are never
//! retried.

use leptos::prelude::*;

use crate::components::blog::BlogSection;
use crate::components::episodes::EpisodesSection;
use crate::state::blog::BlogState;
use crate::state::episodes::EpisodesState;
use crate::state::fetch::FetchState;

/// Blog posts requested for the landing page feed.
const BLOG_POSTS_SHOWN: usize = 6;

/// Landing page composing the episode and blog sections.
#[component]
pub fn HomePage() -> impl IntoView {
    let episodes = expect_context::<RwSignal<EpisodesState>>();
    let blog = expect_context::<RwSignal<BlogState>>();

    Effect::new(move || {
        if !episodes.with_untracked(|state| state.fetch.is_idle()) {
            return;
        }
        episodes.update(|state| state.fetch = FetchState::Loading);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_episodes().await {
                Ok(list) => episodes.update(|state| state.load(list)),
                Err(_) => {
                    // Ask the gateway why, so the failure message can say
                    // whether the service is known-degraded.
                    let health = crate::net::api::fetch_episodes_health().await;
                    episodes.update(|state| {
                        state.service_health = health;
                        state.fetch = FetchState::Failed("Failed to load episodes".to_owned());
                    });
                }
            }
        });
    });

    Effect::new(move || {
        if !blog.with_untracked(|state| state.fetch.is_idle()) {
            return;
        }
        blog.update(|state| state.fetch = FetchState::Loading);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_blog_posts(BLOG_POSTS_SHOWN, None, None, false).await {
                Ok(response) => blog.update(|state| {
                    state.fetch = FetchState::Loaded(response.posts);
                }),
                Err(_) => blog.update(|state| {
                    state.fetch = FetchState::Failed("Failed to load blog posts".to_owned());
                }),
            }
        });
    });

    view! {
        <main class="home">
            <header class="hero">
                <h1 class="hero__title">"The Days Grimm"</h1>
                <p class="hero__tagline">
                    "Two friends talking true crime, the strange, and the macabre. New episodes weekly."
                </p>
                <a class="btn btn--primary" href="#episodes">"Browse Episodes"</a>
            </header>

            <EpisodesSection/>
            <BlogSection/>

            <footer class="footer">
                <p>"\u{a9} The Days Grimm Podcast"</p>
            </footer>
        </main>
    }
}
