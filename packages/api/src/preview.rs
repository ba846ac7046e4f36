//! Upload results and the preview derived from them.

use serde::{Deserialize, Serialize};

use crate::lesson::{ContentType, VideoSource};
use crate::youtube;

/// The `lesson` object of a successful upload response.
///
/// Fields stay as plain strings: an unfamiliar value means "no preview",
/// not a failed upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub content_type: String,
    #[serde(default)]
    pub video_type: Option<String>,
    pub content_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct UploadResponse {
    pub lesson: UploadResult,
}

/// What to show under the form after an upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preview {
    YoutubeEmbed(String),
    Video(String),
    Audio(String),
    Document(String),
}

impl Preview {
    /// Derive the preview for `result`. Server-relative content URLs are
    /// prefixed with `server_base`. Only a `local` video is hosted; any other
    /// video is read as a YouTube link, and one without a recognisable id
    /// yields no preview.
    pub fn from_result(result: &UploadResult, server_base: &str) -> Option<Self> {
        let hosted = || format!("{}{}", server_base.trim_end_matches('/'), result.content_url);

        match ContentType::parse(&result.content_type)? {
            ContentType::Video => {
                match result.video_type.as_deref().and_then(VideoSource::parse) {
                    Some(VideoSource::Local) => Some(Preview::Video(hosted())),
                    _ => youtube::embed_url(&result.content_url).map(Preview::YoutubeEmbed),
                }
            }
            ContentType::Text => Some(Preview::Document(hosted())),
            ContentType::Audio => Some(Preview::Audio(hosted())),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Preview::YoutubeEmbed(url)
            | Preview::Video(url)
            | Preview::Audio(url)
            | Preview::Document(url) => url,
        }
    }
}
