//! # API crate: remote lesson service and the upload domain
//!
//! Everything the client needs to talk to the lesson API, plus the upload
//! form logic that does not depend on any UI.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`lesson`] | `LessonDraft` with its content-type / video-source rules, validation, `UploadPayload` |
//! | [`upload`] | `UploadFlow` state (pending, notice, preview) and the `LessonUploader` seam |
//! | [`preview`] | `UploadResult` from the server and the `Preview` derived from it |
//! | [`youtube`] | YouTube video id extraction and embed URLs |
//! | [`client`] | `reqwest` client: login, register, multipart upload |
//! | [`error`] | `ValidationError`, `ApiError`, `UploadError` |
//!
//! ## Endpoints
//!
//! - `POST /api/auth/login`, `POST /api/auth/register`: JSON in, `{ "user": ... }` out
//! - `POST /api/lessons/upload_content`: multipart in, `{ "lesson": ... }` out

pub mod client;
pub mod error;
pub mod lesson;
pub mod preview;
pub mod upload;
pub mod youtube;

pub use client::{ApiClient, Registration};
pub use error::{ApiError, UploadError, ValidationError};
pub use lesson::{ContentType, LessonDraft, LessonFile, UploadPayload, VideoSource};
pub use preview::{Preview, UploadResult};
pub use upload::{LessonUploader, Notice, NoticeLevel, UploadFlow};

pub use store::{Role, UserRecord};
