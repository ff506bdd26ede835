//! YouTube Data API proxy.
//!
//! DESIGN
//! ======
//! Two upstream calls per request: a channel search for the latest video IDs,
//! then a videos lookup for durations, view counts, and livestream schedules.
//! Everything after the HTTP exchange is pure shaping (`parse_*` / `shape_*`)
//! so the interesting parts are testable on fixture JSON.
//!
//! Scheduled premieres surface as upcoming episodes; the most recent
//! published video is flagged as featured.

#[cfg(test)]
#[path = "youtube_test.rs"]
mod youtube_test;

use feed::Episode;
use serde::Deserialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::state::AppState;

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";
const MAX_RESULTS: &str = "25";

#[derive(Debug, thiserror::Error)]
pub enum YoutubeError {
    #[error("YouTube API credentials not configured")]
    NotConfigured,
    #[error("YouTube API request failed: {0}")]
    Request(String),
    #[error("YouTube API returned status {0}")]
    Status(u16),
    #[error("failed to parse YouTube API response: {0}")]
    Parse(String),
}

/// Fetch the channel's latest uploads and shape them into episode records.
/// Single attempt; any transport failure or non-2xx status is terminal.
pub async fn fetch_episodes(state: &AppState) -> Result<Vec<Episode>, YoutubeError> {
    let key = state.config.youtube_api_key.as_deref().ok_or(YoutubeError::NotConfigured)?;
    let channel_id =
        state.config.youtube_channel_id.as_deref().ok_or(YoutubeError::NotConfigured)?;

    let search_body = get_text(
        &state.http,
        SEARCH_URL,
        &[
            ("key", key),
            ("channelId", channel_id),
            ("part", "snippet"),
            ("order", "date"),
            ("type", "video"),
            ("maxResults", MAX_RESULTS),
        ],
    )
    .await?;
    let ids = parse_search_ids(&search_body)?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let videos_body = get_text(
        &state.http,
        VIDEOS_URL,
        &[
            ("key", key),
            ("id", &ids.join(",")),
            ("part", "snippet,contentDetails,statistics,liveStreamingDetails"),
        ],
    )
    .await?;
    let items = parse_videos_response(&videos_body)?;
    Ok(shape_episodes(items))
}

async fn get_text(
    http: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<String, YoutubeError> {
    let response = http
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| YoutubeError::Request(e.to_string()))?;

    let status = response.status();
    let text = response.text().await.map_err(|e| YoutubeError::Request(e.to_string()))?;

    if !status.is_success() {
        return Err(YoutubeError::Status(status.as_u16()));
    }
    Ok(text)
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoItem {
    pub(crate) id: String,
    pub(crate) snippet: Snippet,
    #[serde(default)]
    pub(crate) content_details: Option<ContentDetails>,
    #[serde(default)]
    pub(crate) statistics: Option<Statistics>,
    #[serde(default)]
    pub(crate) live_streaming_details: Option<LiveStreamingDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snippet {
    #[serde(default)]
    pub(crate) published_at: String,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) thumbnails: Thumbnails,
    /// `"upcoming"` on scheduled premieres and livestreams.
    #[serde(default)]
    pub(crate) live_broadcast_content: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Thumbnails {
    #[serde(default)]
    pub(crate) default: Option<Thumbnail>,
    #[serde(default)]
    pub(crate) medium: Option<Thumbnail>,
    #[serde(default)]
    pub(crate) high: Option<Thumbnail>,
    #[serde(default)]
    pub(crate) maxres: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub(crate) url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentDetails {
    #[serde(default)]
    pub(crate) duration: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Statistics {
    #[serde(default)]
    pub(crate) view_count: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LiveStreamingDetails {
    #[serde(default)]
    pub(crate) scheduled_start_time: Option<String>,
}

// =============================================================================
// PARSING & SHAPING
// =============================================================================

fn parse_search_ids(json: &str) -> Result<Vec<String>, YoutubeError> {
    let response: SearchResponse =
        serde_json::from_str(json).map_err(|e| YoutubeError::Parse(e.to_string()))?;
    Ok(response.items.into_iter().filter_map(|item| item.id.video_id).collect())
}

pub(crate) fn parse_videos_response(json: &str) -> Result<Vec<VideoItem>, YoutubeError> {
    let response: VideosResponse =
        serde_json::from_str(json).map_err(|e| YoutubeError::Parse(e.to_string()))?;
    Ok(response.items)
}

/// Shape raw video items into the public episode list: newest first, with
/// the latest published episode flagged as featured.
pub(crate) fn shape_episodes(items: Vec<VideoItem>) -> Vec<Episode> {
    let mut episodes: Vec<Episode> = items.into_iter().map(shape_episode).collect();
    episodes.sort_by_key(|e| std::cmp::Reverse(e.sort_timestamp));
    if let Some(latest) = episodes.iter_mut().find(|e| !e.is_upcoming) {
        latest.featured = true;
    }
    episodes
}

fn shape_episode(item: VideoItem) -> Episode {
    let is_upcoming = item.snippet.live_broadcast_content == "upcoming";

    // Upcoming entries sort by scheduled start; published ones by publish time.
    let stamp_source = if is_upcoming {
        item.live_streaming_details
            .as_ref()
            .and_then(|d| d.scheduled_start_time.clone())
            .unwrap_or_else(|| item.snippet.published_at.clone())
    } else {
        item.snippet.published_at.clone()
    };
    let parsed = OffsetDateTime::parse(&stamp_source, &Rfc3339).ok();
    let date = parsed.map_or_else(|| stamp_source.clone(), format_display_date);
    let sort_timestamp = parsed.map_or(0, |t| t.unix_timestamp().saturating_mul(1000));

    let (number, title) = split_episode_number(&item.snippet.title);
    let duration = if is_upcoming {
        "Upcoming".to_owned()
    } else {
        item.content_details
            .as_ref()
            .and_then(|c| parse_iso8601_duration(&c.duration))
            .map_or_else(String::new, format_duration)
    };
    let view_count = item
        .statistics
        .as_ref()
        .map_or_else(|| "0".to_owned(), |s| format_view_count(&s.view_count));
    let youtube_url = watch_url(&item.id);
    let thumbnail = best_thumbnail(&item.snippet.thumbnails);

    Episode {
        id: item.id,
        number,
        title,
        description: item.snippet.description,
        date,
        duration,
        thumbnail,
        view_count,
        featured: false,
        youtube_url,
        spotify_url: None,
        apple_podcast_url: None,
        is_upcoming,
        sort_timestamp,
    }
}

fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Largest thumbnail the platform rendered for this video.
pub(crate) fn best_thumbnail(thumbnails: &Thumbnails) -> String {
    [&thumbnails.maxres, &thumbnails.high, &thumbnails.medium, &thumbnails.default]
        .into_iter()
        .find_map(|t| t.as_ref().map(|t| t.url.clone()))
        .unwrap_or_default()
}

/// Split a leading `Ep[isode] N`-style prefix off a video title.
///
/// Returns `("Ep. N", rest)` when a numbered prefix is recognized, otherwise
/// an empty number and the full title.
pub(crate) fn split_episode_number(raw: &str) -> (String, String) {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();

    let rest = ["episode", "ep.", "ep", "#"].iter().find_map(|prefix| {
        if !lower.starts_with(prefix) {
            return None;
        }
        let after = trimmed[prefix.len()..].trim_start();
        after.chars().next().filter(char::is_ascii_digit).map(|_| after)
    });
    let Some(rest) = rest else {
        return (String::new(), trimmed.to_owned());
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let remainder = rest[digits.len()..].trim_start_matches([':', '-', '|', '.', ' ']).trim();
    if remainder.is_empty() {
        return (String::new(), trimmed.to_owned());
    }
    (format!("Ep. {digits}"), remainder.to_owned())
}

/// Parse an ISO-8601 duration like `PT1H2M3S` into whole seconds.
/// Returns `None` for malformed input or calendar units beyond weeks.
pub(crate) fn parse_iso8601_duration(raw: &str) -> Option<u64> {
    let rest = raw.strip_prefix('P')?;
    let mut seconds: u64 = 0;
    let mut digits = String::new();
    let mut in_time = false;

    for c in rest.chars() {
        match c {
            'T' => {
                if !digits.is_empty() {
                    return None;
                }
                in_time = true;
            }
            '0'..='9' => digits.push(c),
            unit => {
                let value: u64 = digits.parse().ok()?;
                digits.clear();
                let multiplier = match (unit, in_time) {
                    ('W', false) => 604_800,
                    ('D', false) => 86_400,
                    ('H', true) => 3_600,
                    ('M', true) => 60,
                    ('S', true) => 1,
                    _ => return None,
                };
                seconds = seconds.checked_add(value.checked_mul(multiplier)?)?;
            }
        }
    }
    if digits.is_empty() { Some(seconds) } else { None }
}

/// `3723` → `"1:02:03"`, `125` → `"2:05"`.
pub(crate) fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Thousands-separated view count; non-numeric input passes through.
pub(crate) fn format_view_count(raw: &str) -> String {
    let Ok(count) = raw.trim().parse::<u64>() else {
        return raw.to_owned();
    };
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_display_date(stamp: OffsetDateTime) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    stamp.format(&format).unwrap_or_default()
}
