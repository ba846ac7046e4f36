//! # Upload flow: draft, submission state and outcome
//!
//! [`UploadFlow`] owns everything the upload page shows: the [`LessonDraft`],
//! the inline [`Notice`], the [`Preview`] and whether a request is in flight.
//! A submission is split in two so the UI can await the request without
//! holding the flow borrowed:
//!
//! 1. [`begin_submit`](UploadFlow::begin_submit) validates and marks the flow
//!    pending, handing back the [`UploadPayload`].
//! 2. [`finish`](UploadFlow::finish) takes the server's answer. Success resets
//!    the draft and sets the preview; failure keeps the draft for a retry.
//!
//! [`submit`](UploadFlow::submit) chains both around a [`LessonUploader`].

use std::future::Future;

use crate::error::{ApiError, UploadError};
use crate::lesson::{LessonDraft, UploadPayload};
use crate::preview::{Preview, UploadResult};

/// Sends a lesson payload to the server.
pub trait LessonUploader {
    fn upload(
        &self,
        payload: UploadPayload,
    ) -> impl Future<Output = Result<UploadResult, ApiError>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Inline message under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

pub const UPLOAD_SUCCEEDED: &str = "Content uploaded successfully!";

#[derive(Clone, Debug, PartialEq)]
pub struct UploadFlow {
    draft: LessonDraft,
    tutor_id: Option<String>,
    server_base: String,
    pending: bool,
    notice: Option<Notice>,
    preview: Option<Preview>,
}

impl UploadFlow {
    pub fn new(tutor_id: Option<String>, server_base: impl Into<String>) -> Self {
        Self {
            draft: LessonDraft::new(),
            tutor_id,
            server_base: server_base.into(),
            pending: false,
            notice: None,
            preview: None,
        }
    }

    pub fn draft(&self) -> &LessonDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut LessonDraft {
        &mut self.draft
    }

    pub fn tutor_id(&self) -> Option<&str> {
        self.tutor_id.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Validate and mark the flow pending. A second call while a request is
    /// in flight is refused without touching the page.
    pub fn begin_submit(&mut self) -> Result<UploadPayload, UploadError> {
        if self.pending {
            return Err(UploadError::AlreadyPending);
        }
        self.notice = None;
        self.preview = None;

        match UploadPayload::from_draft(&self.draft, self.tutor_id.as_deref()) {
            Ok(payload) => {
                self.pending = true;
                tracing::info!(
                    content_type = payload.content_type().unwrap_or_default(),
                    "Uploading lesson"
                );
                Ok(payload)
            }
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Apply the server's answer to an upload started by `begin_submit`.
    pub fn finish(&mut self, result: Result<UploadResult, ApiError>) -> Result<(), UploadError> {
        self.pending = false;
        match result {
            Ok(lesson) => {
                self.preview = Preview::from_result(&lesson, &self.server_base);
                if self.preview.is_none() {
                    tracing::debug!(url = %lesson.content_url, "No preview for uploaded lesson");
                }
                self.notice = Some(Notice::success(UPLOAD_SUCCEEDED));
                self.draft = LessonDraft::new();
                Ok(())
            }
            Err(e) => {
                tracing::error!("Lesson upload failed: {}", e);
                let err = UploadError::from(e);
                self.notice = Some(Notice::error(err.to_string()));
                self.preview = None;
                Err(err)
            }
        }
    }

    pub async fn submit<U: LessonUploader>(&mut self, uploader: &U) -> Result<(), UploadError> {
        let payload = self.begin_submit()?;
        let result = uploader.upload(payload).await;
        self.finish(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::{ContentType, LessonFile, VideoSource};
    use std::cell::RefCell;

    const BASE: &str = "http://localhost:8000";

    /// Records payloads and answers with a canned response.
    struct FakeUploader {
        sent: RefCell<Vec<UploadPayload>>,
        respond: fn(&UploadPayload) -> Result<UploadResult, ApiError>,
    }

    impl FakeUploader {
        fn new(respond: fn(&UploadPayload) -> Result<UploadResult, ApiError>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                respond,
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl LessonUploader for FakeUploader {
        async fn upload(&self, payload: UploadPayload) -> Result<UploadResult, ApiError> {
            let result = (self.respond)(&payload);
            self.sent.borrow_mut().push(payload);
            result
        }
    }

    fn hosted(payload: &UploadPayload) -> Result<UploadResult, ApiError> {
        Ok(UploadResult {
            content_type: payload.content_type().unwrap_or_default().to_string(),
            video_type: payload.field("video_type").map(str::to_string),
            content_url: "/uploads/lesson-1".to_string(),
        })
    }

    fn echo_youtube(payload: &UploadPayload) -> Result<UploadResult, ApiError> {
        Ok(UploadResult {
            content_type: "video".to_string(),
            video_type: Some("youtube".to_string()),
            content_url: payload.field("youtube_url").unwrap_or_default().to_string(),
        })
    }

    fn rejected(_: &UploadPayload) -> Result<UploadResult, ApiError> {
        Err(ApiError::Status {
            status: 400,
            detail: Some("Category is required".to_string()),
        })
    }

    fn filled_flow() -> UploadFlow {
        let mut flow = UploadFlow::new(Some("7".to_string()), BASE);
        let draft = flow.draft_mut();
        draft.title = "Photosynthesis".to_string();
        draft.description = "Light reactions".to_string();
        draft.category = "Science".to_string();
        draft.set_file(Some(LessonFile::new(
            "leaf.mp4",
            Some("video/mp4".to_string()),
            vec![1; 16],
        )));
        flow
    }

    #[tokio::test]
    async fn test_successful_upload_resets_draft() {
        let uploader = FakeUploader::new(hosted);
        let mut flow = filled_flow();

        flow.submit(&uploader).await.unwrap();

        assert_eq!(uploader.calls(), 1);
        assert_eq!(flow.draft(), &LessonDraft::new());
        assert_eq!(flow.tutor_id(), Some("7"));
        assert!(!flow.is_pending());
        assert_eq!(flow.notice().unwrap().level, NoticeLevel::Success);
        assert_eq!(
            flow.preview().map(Preview::url),
            Some("http://localhost:8000/uploads/lesson-1")
        );
    }

    #[tokio::test]
    async fn test_missing_file_never_reaches_network() {
        let uploader = FakeUploader::new(hosted);
        let mut flow = UploadFlow::new(Some("7".to_string()), BASE);

        let err = flow.submit(&uploader).await.unwrap_err();

        assert!(matches!(err, UploadError::Validation(_)));
        assert_eq!(uploader.calls(), 0);
        assert!(!flow.is_pending());
        assert_eq!(
            flow.notice().map(|n| n.text.as_str()),
            Some("Please select a file to upload.")
        );
    }

    #[tokio::test]
    async fn test_missing_tutor_id_reported_first() {
        let uploader = FakeUploader::new(hosted);
        let mut flow = UploadFlow::new(None, BASE);

        flow.submit(&uploader).await.unwrap_err();
        assert!(flow.notice().unwrap().text.contains("Tutor ID not found"));
        assert_eq!(uploader.calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_upload_keeps_draft() {
        let uploader = FakeUploader::new(rejected);
        let mut flow = filled_flow();
        let before = flow.draft().clone();

        let err = flow.submit(&uploader).await.unwrap_err();

        assert!(matches!(err, UploadError::Api(_)));
        assert_eq!(flow.draft(), &before);
        assert!(flow.preview().is_none());
        let notice = flow.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "Upload failed: Category is required");

        // retry goes out again with the same draft
        flow.submit(&uploader).await.unwrap_err();
        assert_eq!(uploader.calls(), 2);
    }

    #[test]
    fn test_second_submit_refused_while_pending() {
        let mut flow = filled_flow();
        let payload = flow.begin_submit().unwrap();
        assert_eq!(payload.field("title"), Some("Photosynthesis"));
        assert!(flow.is_pending());

        assert!(matches!(flow.begin_submit(), Err(UploadError::AlreadyPending)));
        assert!(flow.notice().is_none());

        flow.finish(hosted(&payload)).unwrap();
        assert!(!flow.is_pending());
        // resolved, so the next attempt is validated again
        assert!(matches!(flow.begin_submit(), Err(UploadError::Validation(_))));
    }

    #[tokio::test]
    async fn test_youtube_upload_embeds_preview() {
        let uploader = FakeUploader::new(echo_youtube);
        let mut flow = filled_flow();
        flow.draft_mut().set_video_source(VideoSource::Youtube);
        flow.draft_mut().set_youtube_url("https://youtu.be/dQw4w9WgXcQ");

        flow.submit(&uploader).await.unwrap();
        assert_eq!(
            flow.preview(),
            Some(&Preview::YoutubeEmbed(
                "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_unrecognised_youtube_link_is_silent() {
        let uploader = FakeUploader::new(echo_youtube);
        let mut flow = filled_flow();
        flow.draft_mut().set_video_source(VideoSource::Youtube);
        flow.draft_mut().set_youtube_url("https://example.com/video");

        flow.submit(&uploader).await.unwrap();
        assert!(flow.preview().is_none());
        assert_eq!(flow.notice().unwrap().text, UPLOAD_SUCCEEDED);
    }

    #[tokio::test]
    async fn test_new_submission_clears_old_preview() {
        let uploader = FakeUploader::new(hosted);
        let mut flow = filled_flow();
        flow.submit(&uploader).await.unwrap();
        assert!(flow.preview().is_some());

        flow.draft_mut().set_content_type(ContentType::Audio);
        flow.submit(&uploader).await.unwrap_err();
        assert!(flow.preview().is_none());
    }
}
