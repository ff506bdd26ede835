//! Reusable card component for recent-episode grid items.

use feed::Episode;
use leptos::prelude::*;

/// A card linking to a published episode on YouTube, with optional podcast
/// platform links when the episode carries them.
#[component]
pub fn EpisodeCard(episode: Episode) -> impl IntoView {
    let spotify = episode.spotify_url.clone();
    let apple = episode.apple_podcast_url.clone();

    view! {
        <article class="episode-card">
            <a class="episode-card__media" href=episode.youtube_url.clone() target="_blank" rel="noopener">
                <img class="episode-card__thumb" src=episode.thumbnail loading="lazy" alt=episode.title.clone()/>
                <span class="episode-card__duration">{episode.duration}</span>
            </a>
            <div class="episode-card__body">
                <span class="episode-card__number">{episode.number}</span>
                <h3 class="episode-card__title">{episode.title}</h3>
                <p class="episode-card__meta">
                    <span>{episode.date}</span>
                    <span>{episode.view_count} " views"</span>
                </p>
                <div class="episode-card__links">
                    <a href=episode.youtube_url target="_blank" rel="noopener">"Watch"</a>
                    {spotify.map(|url| view! {
                        <a href=url target="_blank" rel="noopener">"Spotify"</a>
                    })}
                    {apple.map(|url| view! {
                        <a href=url target="_blank" rel="noopener">"Apple Podcasts"</a>
                    })}
                </div>
            </div>
        </article>
    }
}
