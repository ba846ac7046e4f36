//! YouTube video id extraction for embed previews.

use std::sync::LazyLock;

use regex::Regex;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// `youtube.com/watch?v=`, `/embed/`, `/v/`, `/e/`, `/<a>/<b>/` and
/// `youtu.be/` followed by an 11-character id.
static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("video id pattern is valid")
});

/// The 11-character video id in `url`, if it is a recognised YouTube link.
pub fn video_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Embeddable player URL for a YouTube link.
pub fn embed_url(url: &str) -> Option<String> {
    video_id(url).map(|id| format!("{EMBED_BASE}{id}"))
}
