//! Blog feed view state.

use feed::RedditBlogPost;

use super::fetch::FetchState;

/// Fetch lifecycle for the blog section.
#[derive(Clone, Debug, Default)]
pub struct BlogState {
    pub fetch: FetchState<Vec<RedditBlogPost>>,
}
