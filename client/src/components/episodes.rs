//! Episodes section: featured episode, upcoming carousel, recent grid.

use feed::Episode;
use leptos::prelude::*;

use crate::components::episode_card::EpisodeCard;
use crate::components::upcoming_carousel::UpcomingCarousel;
use crate::state::episodes::EpisodesState;
use crate::state::fetch::FetchState;

/// Fallback destination once the recent grid is fully revealed.
pub const YOUTUBE_CHANNEL_URL: &str = "https://www.youtube.com/@TheDaysGrimmPodcast";

/// The full episodes section. Branches on the fetch lifecycle; empty data
/// renders an empty section rather than an error.
#[component]
pub fn EpisodesSection() -> impl IntoView {
    let episodes = expect_context::<RwSignal<EpisodesState>>();

    view! {
        <section class="episodes" id="episodes">
            {move || {
                episodes.with(|state| match &state.fetch {
                    FetchState::Idle | FetchState::Loading => {
                        view! { <p class="episodes__status">"Loading episodes..."</p> }.into_any()
                    }
                    FetchState::Failed(_) => {
                        let notice = state.degraded_notice().map(str::to_owned);
                        view! {
                            <p class="episodes__status episodes__status--error">"Failed to load episodes"</p>
                            {notice.map(|message| view! {
                                <p class="episodes__status episodes__status--notice">{message}</p>
                            })}
                        }
                        .into_any()
                    }
                    FetchState::Loaded(_) => view! { <LoadedEpisodes/> }.into_any(),
                })
            }}
        </section>
    }
}

#[component]
fn LoadedEpisodes() -> impl IntoView {
    let episodes = expect_context::<RwSignal<EpisodesState>>();

    view! {
        <UpcomingCarousel/>

        {move || {
            episodes
                .with(EpisodesState::featured)
                .map(|episode| view! { <FeaturedEpisode episode/> })
        }}

        <Show when=move || !episodes.with(|state| state.visible_recent().is_empty())>
            <h2 class="episodes__heading">"Recent Episodes"</h2>
            <div class="episodes__grid">
                {move || {
                    episodes
                        .with(EpisodesState::visible_recent)
                        .into_iter()
                        .map(|episode| view! { <EpisodeCard episode/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>

        <div class="episodes__footer">
            <Show when=move || episodes.with(EpisodesState::can_reveal_more)>
                <button
                    class="btn btn--primary"
                    on:click=move |_| episodes.update(EpisodesState::reveal_more)
                >
                    "More Episodes"
                </button>
            </Show>
            <Show when=move || episodes.with(EpisodesState::show_channel_link)>
                <a class="btn" href=YOUTUBE_CHANNEL_URL target="_blank" rel="noopener">
                    "Visit our YouTube channel"
                </a>
            </Show>
        </div>
    }
}

/// Hero treatment for the most recent published episode.
#[component]
fn FeaturedEpisode(episode: Episode) -> impl IntoView {
    view! {
        <div class="featured">
            <a class="featured__media" href=episode.youtube_url.clone() target="_blank" rel="noopener">
                <img class="featured__thumb" src=episode.thumbnail alt=episode.title.clone()/>
            </a>
            <div class="featured__body">
                <span class="featured__badge">"Latest Episode"</span>
                <span class="featured__number">{episode.number}</span>
                <h2 class="featured__title">{episode.title}</h2>
                <p class="featured__description">{episode.description}</p>
                <p class="featured__meta">
                    <span>{episode.date}</span>
                    <span>{episode.duration}</span>
                    <span>{episode.view_count} " views"</span>
                </p>
                <a class="btn btn--primary" href=episode.youtube_url target="_blank" rel="noopener">
                    "Watch Now"
                </a>
            </div>
        </div>
    }
}
