//! Blog section fed by the filtered subreddit feed.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use feed::RedditBlogPost;
use leptos::prelude::*;

use crate::state::blog::BlogState;
use crate::state::fetch::FetchState;
use crate::util::dates::format_epoch_date;

const EXCERPT_CHARS: usize = 240;

/// Trim body text to a short preview on a character boundary.
fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    // Back up to the last space so the ellipsis never splits a word.
    let trimmed = cut.rfind(' ').map_or(cut.as_str(), |at| &cut[..at]);
    format!("{}...", trimmed.trim_end())
}

/// Blog feed section. Same lifecycle discipline as the episodes section:
/// loading text, a static failure message, nothing for an empty feed.
#[component]
pub fn BlogSection() -> impl IntoView {
    let blog = expect_context::<RwSignal<BlogState>>();

    view! {
        <section class="blog" id="blog">
            <h2 class="blog__heading">"From the Blog"</h2>
            {move || {
                blog.with(|state| match &state.fetch {
                    FetchState::Idle | FetchState::Loading => {
                        view! { <p class="blog__status">"Loading posts..."</p> }.into_any()
                    }
                    FetchState::Failed(_) => {
                        view! { <p class="blog__status blog__status--error">"Failed to load blog posts"</p> }
                            .into_any()
                    }
                    FetchState::Loaded(posts) => view! {
                        <div class="blog__grid">
                            {posts
                                .iter()
                                .cloned()
                                .map(|post| view! { <BlogCard post/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any(),
                })
            }}
        </section>
    }
}

/// One blog post card.
#[component]
fn BlogCard(post: RedditBlogPost) -> impl IntoView {
    let date = format_epoch_date(post.created_utc);
    let preview = excerpt(&post.selftext, EXCERPT_CHARS);

    view! {
        <article class="blog-card">
            {post.thumbnail.map(|src| view! {
                <img class="blog-card__thumb" src=src loading="lazy" alt=""/>
            })}
            <div class="blog-card__body">
                {post.flair.map(|flair| view! { <span class="blog-card__flair">{flair}</span> })}
                <h3 class="blog-card__title">{post.title}</h3>
                <p class="blog-card__meta">
                    <span>{date}</span>
                    <span>"u/" {post.author}</span>
                </p>
                <p class="blog-card__excerpt">{preview}</p>
                <a class="blog-card__link" href=post.url target="_blank" rel="noopener">
                    "Read more"
                </a>
            </div>
        </article>
    }
}
