use super::*;

fn sample_episode() -> Episode {
    Episode {
        id: "abc123".to_owned(),
        number: "Ep. 201".to_owned(),
        title: "Haunted Lighthouses".to_owned(),
        description: "Two hours of maritime dread.".to_owned(),
        date: "Jan 5, 2025".to_owned(),
        duration: "1:42:10".to_owned(),
        thumbnail: "https://img.example/abc123/maxres.jpg".to_owned(),
        view_count: "12,345".to_owned(),
        featured: true,
        youtube_url: "https://www.youtube.com/watch?v=abc123".to_owned(),
        spotify_url: None,
        apple_podcast_url: None,
        is_upcoming: false,
        sort_timestamp: 1_736_035_200_000,
    }
}

#[test]
fn episode_serializes_camel_case_fields() {
    let value = serde_json::to_value(sample_episode()).expect("serialize");
    assert!(value.get("viewCount").is_some());
    assert!(value.get("youtubeUrl").is_some());
    assert!(value.get("spotifyUrl").is_some());
    assert!(value.get("applePodcastUrl").is_some());
    assert!(value.get("isUpcoming").is_some());
    assert!(value.get("sortTimestamp").is_some());
    assert!(value.get("view_count").is_none());
}

#[test]
fn episode_round_trips() {
    let episode = sample_episode();
    let json = serde_json::to_string(&episode).expect("serialize");
    let back: Episode = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, episode);
}

#[test]
fn episode_defaults_optional_fields_on_deserialize() {
    let json = r#"{
        "id": "x",
        "number": "",
        "title": "t",
        "description": "d",
        "date": "Jan 1, 2025",
        "duration": "1:00",
        "thumbnail": "",
        "viewCount": "0",
        "youtubeUrl": "https://www.youtube.com/watch?v=x"
    }"#;
    let episode: Episode = serde_json::from_str(json).expect("deserialize");
    assert!(!episode.featured);
    assert!(!episode.is_upcoming);
    assert_eq!(episode.sort_timestamp, 0);
    assert_eq!(episode.spotify_url, None);
    assert_eq!(episode.apple_podcast_url, None);
}

#[test]
fn blog_post_uses_camel_case_created_utc() {
    let post = RedditBlogPost {
        id: "t3_1".to_owned(),
        title: "Show notes".to_owned(),
        selftext: "notes body".to_owned(),
        url: "https://www.reddit.com/r/pod/comments/1".to_owned(),
        created_utc: 1_700_000_000,
        author: "host".to_owned(),
        flair: Some("Blog".to_owned()),
        thumbnail: None,
    };
    let value = serde_json::to_value(&post).expect("serialize");
    assert_eq!(value.get("createdUtc").and_then(serde_json::Value::as_i64), Some(1_700_000_000));
    assert!(value.get("created_utc").is_none());
}

#[test]
fn blog_response_omits_empty_optional_fields() {
    let resp = BlogResponse { posts: Vec::new(), error: None, message: None, debug: None };
    let value = serde_json::to_value(&resp).expect("serialize");
    assert!(value.get("error").is_none());
    assert!(value.get("message").is_none());
    assert!(value.get("debug").is_none());
    assert!(value.get("posts").is_some());
}

#[test]
fn blog_response_parses_error_envelope() {
    let json = r#"{"posts":[],"error":"Something went wrong!","message":"upstream status 503"}"#;
    let resp: BlogResponse = serde_json::from_str(json).expect("deserialize");
    assert!(resp.posts.is_empty());
    assert_eq!(resp.error.as_deref(), Some("Something went wrong!"));
    assert_eq!(resp.message.as_deref(), Some("upstream status 503"));
    assert!(resp.debug.is_none());
}

#[test]
fn blog_debug_round_trips() {
    let debug = BlogDebug {
        request: BlogDebugRequest {
            subreddit: "TheDaysGrimm".to_owned(),
            required_flair: "Blog".to_owned(),
            allowed_author: "thedaysgrimm".to_owned(),
            limit: 6,
            url: "https://www.reddit.com/r/TheDaysGrimm/new.json?limit=100&raw_json=1".to_owned(),
        },
        reddit_status: 200,
        total_children: 25,
        filtered_count: 3,
        sample: vec![BlogDebugSample {
            id: "t3_1".to_owned(),
            title: "Show notes".to_owned(),
            flair: None,
            author: "host".to_owned(),
        }],
    };
    let json = serde_json::to_string(&debug).expect("serialize");
    assert!(json.contains("redditStatus"));
    assert!(json.contains("totalChildren"));
    let back: BlogDebug = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, debug);
}

#[test]
fn health_status_field_names_are_plain() {
    let health = HealthStatus {
        status: "OK".to_owned(),
        message: "API is running".to_owned(),
        timestamp: "2025-01-05T00:00:00Z".to_owned(),
    };
    let value = serde_json::to_value(&health).expect("serialize");
    assert_eq!(value.get("status").and_then(serde_json::Value::as_str), Some("OK"));
    assert!(value.get("timestamp").is_some());
}
