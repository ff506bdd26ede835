use super::*;

const LISTING_FIXTURE: &str = r#"{
  "kind": "Listing",
  "data": {
    "children": [
      {
        "kind": "t3",
        "data": {
          "id": "post1",
          "title": "Show notes: Ep. 200",
          "selftext": "Sources and corrections.",
          "url": "https://www.reddit.com/r/TheDaysGrimm/comments/post1/",
          "permalink": "/r/TheDaysGrimm/comments/post1/",
          "created_utc": 1735689600.0,
          "author": "thedaysgrimm",
          "link_flair_text": "Blog",
          "thumbnail": "https://b.thumbs.example/post1.jpg"
        }
      },
      {
        "kind": "t3",
        "data": {
          "id": "post2",
          "title": "Fan art thread",
          "selftext": "",
          "url": "https://imgur.example/xyz",
          "permalink": "/r/TheDaysGrimm/comments/post2/",
          "created_utc": 1735603200.0,
          "author": "some_fan",
          "link_flair_text": "Fan Art",
          "thumbnail": "self"
        }
      },
      {
        "kind": "t3",
        "data": {
          "id": "post3",
          "title": "Show notes: Ep. 199",
          "selftext": "More notes.",
          "permalink": "/r/TheDaysGrimm/comments/post3/",
          "created_utc": 1735516800.0,
          "author": "TheDaysGrimm",
          "link_flair_text": "blog",
          "thumbnail": "self"
        }
      },
      {
        "kind": "t3",
        "data": {
          "id": "post4",
          "title": "Blog-flaired impostor",
          "selftext": "",
          "permalink": "/r/TheDaysGrimm/comments/post4/",
          "created_utc": 1735430400.0,
          "author": "impostor",
          "link_flair_text": "Blog"
        }
      }
    ]
  }
}"#;

#[test]
fn parse_listing_reads_children() {
    let posts = parse_listing(LISTING_FIXTURE).expect("parse");
    assert_eq!(posts.len(), 4);
    assert_eq!(posts[0].id, "post1");
    assert_eq!(posts[2].link_flair_text.as_deref(), Some("blog"));
}

#[test]
fn parse_listing_rejects_invalid_json() {
    assert!(matches!(parse_listing("<html>rate limited</html>"), Err(RedditError::Parse(_))));
}

#[test]
fn filter_keeps_flair_and_author_matches_only() {
    let raw = parse_listing(LISTING_FIXTURE).expect("parse");
    let posts = filter_posts(&raw, "Blog", "thedaysgrimm", 10);
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    // post2 fails both filters, post4 fails the author filter.
    assert_eq!(ids, vec!["post1", "post3"]);
}

#[test]
fn filter_is_case_insensitive() {
    let raw = parse_listing(LISTING_FIXTURE).expect("parse");
    // post3 has flair "blog" and author "TheDaysGrimm".
    let posts = filter_posts(&raw, "BLOG", "THEDAYSGRIMM", 10);
    assert_eq!(posts.len(), 2);
}

#[test]
fn filter_truncates_to_limit() {
    let raw = parse_listing(LISTING_FIXTURE).expect("parse");
    let posts = filter_posts(&raw, "Blog", "thedaysgrimm", 1);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "post1");
}

#[test]
fn shaped_post_carries_wire_fields() {
    let raw = parse_listing(LISTING_FIXTURE).expect("parse");
    let posts = filter_posts(&raw, "Blog", "thedaysgrimm", 10);
    let first = &posts[0];
    assert_eq!(first.created_utc, 1_735_689_600);
    assert_eq!(first.author, "thedaysgrimm");
    assert_eq!(first.flair.as_deref(), Some("Blog"));
    assert_eq!(first.thumbnail.as_deref(), Some("https://b.thumbs.example/post1.jpg"));
}

#[test]
fn post_url_falls_back_to_permalink() {
    let raw = parse_listing(LISTING_FIXTURE).expect("parse");
    let post3 = raw.iter().find(|p| p.id == "post3").expect("post3");
    assert_eq!(post_url(post3), "https://www.reddit.com/r/TheDaysGrimm/comments/post3/");
    let post1 = raw.iter().find(|p| p.id == "post1").expect("post1");
    assert_eq!(post_url(post1), "https://www.reddit.com/r/TheDaysGrimm/comments/post1/");
}

#[test]
fn thumbnail_placeholders_become_none() {
    assert_eq!(normalize_thumbnail(Some("self")), None);
    assert_eq!(normalize_thumbnail(Some("default")), None);
    assert_eq!(normalize_thumbnail(Some("nsfw")), None);
    assert_eq!(normalize_thumbnail(Some("")), None);
    assert_eq!(normalize_thumbnail(None), None);
    assert_eq!(
        normalize_thumbnail(Some("https://b.thumbs.example/x.jpg")),
        Some("https://b.thumbs.example/x.jpg".to_owned())
    );
}

#[test]
fn clamp_limit_defaults_and_bounds() {
    assert_eq!(clamp_limit(None), 6);
    assert_eq!(clamp_limit(Some(0)), 1);
    assert_eq!(clamp_limit(Some(12)), 12);
    assert_eq!(clamp_limit(Some(500)), 25);
}

#[test]
fn listing_url_targets_new_listing() {
    let url = listing_url("TheDaysGrimm");
    assert_eq!(url, "https://www.reddit.com/r/TheDaysGrimm/new.json?limit=100&raw_json=1");
}
