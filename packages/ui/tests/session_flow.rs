//! End-to-end session scenarios without a renderer: a session is stored,
//! routes are resolved against it, and a lesson goes through the upload flow.

use std::cell::RefCell;

use api::{
    ApiError, ContentType, LessonFile, LessonUploader, NoticeLevel, Preview, UploadFlow,
    UploadPayload, UploadResult,
};
use store::{Access, AuthGate, MemoryStorage, Role, SessionStore, UserRecord};
use ui::{resolve, Page, Resolution};

const SERVER: &str = "http://localhost:8000";

struct RecordingUploader {
    sent: RefCell<Vec<UploadPayload>>,
    answer: UploadResult,
}

impl LessonUploader for RecordingUploader {
    async fn upload(&self, payload: UploadPayload) -> Result<UploadResult, ApiError> {
        self.sent.borrow_mut().push(payload);
        Ok(self.answer.clone())
    }
}

fn gate(storage: &MemoryStorage) -> AuthGate<MemoryStorage> {
    AuthGate::new(SessionStore::new(storage.clone()))
}

fn tutor() -> UserRecord {
    UserRecord::new("t-7", Role::Tutor).with_field("name", "Ada")
}

#[tokio::test]
async fn test_tutor_logs_in_and_uploads_a_video() {
    let storage = MemoryStorage::new();
    let mut auth = gate(&storage);
    assert_eq!(resolve("/upload", auth.access()), Resolution::Redirect(Page::Login));

    auth.login(tutor(), Role::Tutor).unwrap();
    assert_eq!(resolve("/login", auth.access()), Resolution::Redirect(Page::TutorDashboard));
    assert_eq!(resolve("/upload", auth.access()), Resolution::Render(Page::Upload));

    let mut flow = UploadFlow::new(auth.tutor_id().map(str::to_string), SERVER);
    let draft = flow.draft_mut();
    draft.title = "Ownership".to_string();
    draft.description = "Moves and borrows".to_string();
    draft.category = "Programming".to_string();
    draft.set_file(Some(LessonFile::new(
        "ownership.mp4",
        Some("video/mp4".to_string()),
        vec![0; 16],
    )));

    let uploader = RecordingUploader {
        sent: RefCell::new(Vec::new()),
        answer: UploadResult {
            content_type: "video".to_string(),
            video_type: Some("local".to_string()),
            content_url: "/uploads/ownership.mp4".to_string(),
        },
    };
    flow.submit(&uploader).await.unwrap();

    let sent = uploader.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].field("tutor_id"), Some("t-7"));
    assert_eq!(sent[0].field("video_type"), Some("local"));

    assert_eq!(
        flow.preview(),
        Some(&Preview::Video(format!("{SERVER}/uploads/ownership.mp4")))
    );
    assert_eq!(flow.notice().map(|n| n.level), Some(NoticeLevel::Success));
    assert!(flow.draft().title.is_empty());
    assert_eq!(flow.draft().content_type(), ContentType::Video);
    assert!(flow.draft().file().is_none());
    assert!(!flow.is_pending());
}

#[test]
fn test_logout_closes_tutor_pages() {
    let storage = MemoryStorage::new();
    let mut auth = gate(&storage);
    auth.login(tutor(), Role::Tutor).unwrap();
    assert_eq!(
        resolve("/tutor-dashboard", auth.access()),
        Resolution::Render(Page::TutorDashboard)
    );

    auth.logout();
    assert_eq!(auth.access(), Access::Anonymous);
    assert!(storage.is_empty());
    assert_eq!(
        resolve("/tutor-dashboard", auth.access()),
        Resolution::Redirect(Page::Login)
    );
    assert_eq!(resolve("/", auth.access()), Resolution::Render(Page::Landing));
}

#[test]
fn test_session_survives_reload() {
    let storage = MemoryStorage::new();
    gate(&storage)
        .login(UserRecord::new("l-1", Role::Learner), Role::Learner)
        .unwrap();

    let reloaded = gate(&storage);
    assert_eq!(reloaded.access(), Access::Authenticated(Role::Learner));
    assert_eq!(reloaded.tutor_id(), None);
    assert_eq!(
        resolve("/somewhere", reloaded.access()),
        Resolution::Redirect(Page::LearnerDashboard)
    );
    assert_eq!(resolve("/upload", reloaded.access()), Resolution::Redirect(Page::Login));
}

#[tokio::test]
async fn test_learner_session_cannot_upload() {
    let storage = MemoryStorage::new();
    let mut auth = gate(&storage);
    auth.login(UserRecord::new("l-2", Role::Learner), Role::Learner)
        .unwrap();

    let mut flow = UploadFlow::new(auth.tutor_id().map(str::to_string), SERVER);
    flow.draft_mut().title = "Sneaky".to_string();
    let uploader = RecordingUploader {
        sent: RefCell::new(Vec::new()),
        answer: UploadResult {
            content_type: "text".to_string(),
            video_type: None,
            content_url: "/uploads/x.pdf".to_string(),
        },
    };

    assert!(flow.submit(&uploader).await.is_err());
    assert!(uploader.sent.borrow().is_empty());
    assert_eq!(flow.notice().map(|n| n.level), Some(NoticeLevel::Error));
    assert_eq!(flow.draft().title, "Sneaky");
}
