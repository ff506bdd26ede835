//! Page sections and reusable cards.

pub mod blog;
pub mod episode_card;
pub mod episodes;
pub mod upcoming_carousel;
