//! # Lesson draft and the multipart payload built from it
//!
//! [`LessonDraft`] is the state of the upload form before it is sent. The
//! content is either a file or a YouTube link, never both:
//!
//! | `content_type` | `video_source` | payload part |
//! |----------------|----------------|--------------|
//! | `video` | `local` | `video_type=local` + `video_file` |
//! | `video` | `youtube` | `video_type=youtube` + `youtube_url` |
//! | `text` | (forced `local`) | `text_file` |
//! | `audio` | (forced `local`) | `audio_file` |
//!
//! Changing the content type or the video source drops whatever file or URL
//! was chosen before. [`UploadPayload::from_draft`] validates the draft and
//! produces the fields in the order the server expects them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Video,
    Text,
    Audio,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Video, ContentType::Text, ContentType::Audio];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::Text => "text",
            ContentType::Audio => "audio",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentType::Video => "Video",
            ContentType::Text => "Text",
            ContentType::Audio => "Audio",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    #[default]
    Local,
    Youtube,
}

impl VideoSource {
    pub fn as_str(self) -> &'static str {
        match self {
            VideoSource::Local => "local",
            VideoSource::Youtube => "youtube",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "local" => Some(VideoSource::Local),
            "youtube" => Some(VideoSource::Youtube),
            _ => None,
        }
    }
}

/// A file picked in the form.
#[derive(Clone, PartialEq, Eq)]
pub struct LessonFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl LessonFile {
    pub fn new(name: impl Into<String>, mime: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.filter(|m| !m.is_empty()),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for LessonFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessonFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Not-yet-submitted upload form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LessonDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    content_type: ContentType,
    video_source: VideoSource,
    youtube_url: String,
    file: Option<LessonFile>,
}

impl LessonDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn video_source(&self) -> VideoSource {
        self.video_source
    }

    pub fn youtube_url(&self) -> &str {
        &self.youtube_url
    }

    pub fn file(&self) -> Option<&LessonFile> {
        self.file.as_ref()
    }

    /// Whether the form should offer a file input.
    pub fn wants_file(&self) -> bool {
        !(self.content_type == ContentType::Video && self.video_source == VideoSource::Youtube)
    }

    /// Switch content type. Always drops the chosen file and URL; anything
    /// but video goes back to a local source.
    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.content_type = content_type;
        if content_type != ContentType::Video {
            self.video_source = VideoSource::Local;
        }
        self.file = None;
        self.youtube_url.clear();
    }

    /// Switch video source. Always drops the chosen file and URL.
    pub fn set_video_source(&mut self, source: VideoSource) {
        if self.content_type != ContentType::Video {
            return;
        }
        self.video_source = source;
        self.file = None;
        self.youtube_url.clear();
    }

    pub fn set_file(&mut self, file: Option<LessonFile>) {
        if file.is_some() {
            self.youtube_url.clear();
        }
        self.file = file;
    }

    pub fn set_youtube_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !url.is_empty() {
            self.file = None;
        }
        self.youtube_url = url;
    }

    /// Check the draft in the order the form reports problems.
    pub fn validate(&self, tutor_id: Option<&str>) -> Result<(), ValidationError> {
        if tutor_id.map_or(true, str::is_empty) {
            return Err(ValidationError::MissingTutorId);
        }
        if self.content_type != ContentType::Text
            && self.video_source == VideoSource::Local
            && self.file.is_none()
        {
            return Err(ValidationError::MissingFile);
        }
        if self.content_type == ContentType::Video
            && self.video_source == VideoSource::Youtube
            && self.youtube_url.trim().is_empty()
        {
            return Err(ValidationError::MissingYoutubeUrl);
        }
        if self.content_type == ContentType::Text && self.file.is_none() {
            return Err(ValidationError::MissingFile);
        }
        Ok(())
    }
}

/// A file-valued multipart field.
#[derive(Clone, Debug, PartialEq)]
pub struct FilePart {
    pub field: &'static str,
    pub file: LessonFile,
}

/// Ready-to-send multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadPayload {
    pub fields: Vec<(&'static str, String)>,
    pub file: Option<FilePart>,
}

impl UploadPayload {
    pub fn from_draft(draft: &LessonDraft, tutor_id: Option<&str>) -> Result<Self, ValidationError> {
        draft.validate(tutor_id)?;
        let tutor_id = tutor_id.ok_or(ValidationError::MissingTutorId)?;

        let mut fields = vec![
            ("title", draft.title.clone()),
            ("description", draft.description.clone()),
            ("category", draft.category.clone()),
            ("tutor_id", tutor_id.to_string()),
            ("content_type", draft.content_type.as_str().to_string()),
        ];

        let file_field = match (draft.content_type, draft.video_source) {
            (ContentType::Video, source) => {
                fields.push(("video_type", source.as_str().to_string()));
                match source {
                    VideoSource::Local => Some("video_file"),
                    VideoSource::Youtube => {
                        fields.push(("youtube_url", draft.youtube_url.trim().to_string()));
                        None
                    }
                }
            }
            (ContentType::Text, _) => Some("text_file"),
            (ContentType::Audio, _) => Some("audio_file"),
        };

        let file = match file_field {
            Some(field) => {
                let file = draft.file.clone().ok_or(ValidationError::MissingFile)?;
                Some(FilePart { field, file })
            }
            None => None,
        };

        Ok(Self { fields, file })
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.field("content_type")
    }
}
