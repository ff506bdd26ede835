//! Episode list view state.
//!
//! DESIGN
//! ======
//! Owns the fetched episode list plus the reveal counter for the recent
//! grid. Partitioning (upcoming vs. recent, featured pick) happens here so
//! the components stay declarative and the rules test natively.

#[cfg(test)]
#[path = "episodes_test.rs"]
mod episodes_test;

use feed::{Episode, HealthStatus};

use super::fetch::FetchState;

/// Recent episodes shown before "More Episodes" is pressed.
pub const VISIBLE_INITIAL: usize = 4;

/// Recent episodes shown after the single reveal step.
pub const VISIBLE_EXPANDED: usize = 8;

/// Fetch lifecycle and presentation counters for the episodes section.
#[derive(Clone, Debug)]
pub struct EpisodesState {
    pub fetch: FetchState<Vec<Episode>>,
    /// Last report from the episodes health endpoint, probed when the
    /// episode list fails to load.
    pub service_health: Option<HealthStatus>,
    visible_count: usize,
}

impl Default for EpisodesState {
    fn default() -> Self {
        Self {
            fetch: FetchState::Idle,
            service_health: None,
            visible_count: VISIBLE_INITIAL,
        }
    }
}

impl EpisodesState {
    /// Record a successful fetch and reset the reveal counter.
    pub fn load(&mut self, episodes: Vec<Episode>) {
        self.fetch = FetchState::Loaded(episodes);
        self.visible_count = VISIBLE_INITIAL;
    }

    fn episodes(&self) -> &[Episode] {
        self.fetch.loaded().map_or(&[], Vec::as_slice)
    }

    /// Scheduled episodes, soonest first, for the carousel.
    #[must_use]
    pub fn upcoming(&self) -> Vec<Episode> {
        let mut list: Vec<Episode> = self
            .episodes()
            .iter()
            .filter(|episode| episode.is_upcoming)
            .cloned()
            .collect();
        list.sort_by_key(|episode| episode.sort_timestamp);
        list
    }

    #[must_use]
    pub fn upcoming_count(&self) -> usize {
        self.episodes()
            .iter()
            .filter(|episode| episode.is_upcoming)
            .count()
    }

    /// Published episodes, newest first.
    #[must_use]
    pub fn recent_sorted(&self) -> Vec<Episode> {
        let mut list: Vec<Episode> = self
            .episodes()
            .iter()
            .filter(|episode| !episode.is_upcoming)
            .cloned()
            .collect();
        list.sort_by_key(|episode| std::cmp::Reverse(episode.sort_timestamp));
        list
    }

    /// The highlighted episode: the flagged one, else the newest published.
    #[must_use]
    pub fn featured(&self) -> Option<Episode> {
        let recent = self.recent_sorted();
        recent
            .iter()
            .find(|episode| episode.featured)
            .or_else(|| recent.first())
            .cloned()
    }

    /// The slice of the recent grid currently on screen.
    #[must_use]
    pub fn visible_recent(&self) -> Vec<Episode> {
        let mut recent = self.recent_sorted();
        recent.truncate(self.visible_count);
        recent
    }

    /// Whether the "More Episodes" control should render.
    #[must_use]
    pub fn can_reveal_more(&self) -> bool {
        self.visible_count < VISIBLE_EXPANDED && self.recent_sorted().len() > self.visible_count
    }

    /// Whether the grid is exhausted and the channel link takes over.
    #[must_use]
    pub fn show_channel_link(&self) -> bool {
        !self.recent_sorted().is_empty() && !self.can_reveal_more()
    }

    /// One-step reveal from the initial grid to the expanded grid.
    pub fn reveal_more(&mut self) {
        self.visible_count = VISIBLE_EXPANDED;
    }

    /// The gateway's explanation when the episode service reports itself
    /// unhealthy (e.g. missing upstream credentials).
    #[must_use]
    pub fn degraded_notice(&self) -> Option<&str> {
        self.service_health
            .as_ref()
            .filter(|health| health.status != "OK")
            .map(|health| health.message.as_str())
    }
}
