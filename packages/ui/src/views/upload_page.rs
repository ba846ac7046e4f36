//! Lesson upload form for tutors.

use api::{ContentType, LessonFile, NoticeLevel, Preview, UploadFlow, VideoSource};
use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::client::{use_api_client, use_config};
use crate::navbar::Navbar;

/// Upload page. The tutor id is taken from the session when the page mounts.
#[component]
pub fn UploadPage(on_back: EventHandler<()>) -> Element {
    let auth = use_auth();
    let config = use_config();
    let client = use_api_client();
    let mut flow = use_signal(move || {
        let tutor_id = auth.peek().tutor_id().map(str::to_string);
        UploadFlow::new(tutor_id, config.api.base())
    });
    let mut media_failed = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            media_failed.set(false);
            let Ok(payload) = flow.write().begin_submit() else {
                return;
            };
            let result = client.upload_lesson(payload).await;
            if let Err(e) = flow.write().finish(result) {
                tracing::debug!("Upload not completed: {}", e);
            }
        }
    };

    let handle_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            flow.write().draft_mut().set_file(None);
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => {
                let file = LessonFile::new(file.name(), file.content_type(), bytes.to_vec());
                flow.write().draft_mut().set_file(Some(file));
            }
            Err(e) => {
                tracing::error!("Failed to read {}: {}", file.name(), e);
                flow.write().draft_mut().set_file(None);
            }
        }
    };

    let state = flow.read();
    let draft = state.draft();
    let title = draft.title.clone();
    let description = draft.description.clone();
    let category = draft.category.clone();
    let content_type = draft.content_type();
    let video_source = draft.video_source();
    let youtube_url = draft.youtube_url().to_string();
    let has_file = draft.file().is_some();
    let pending = state.is_pending();
    let notice = state.notice().cloned();
    let preview = state.preview().cloned();
    drop(state);

    let (file_label, accept) = match content_type {
        ContentType::Video => ("Video File", "video/*"),
        ContentType::Text => ("Text File (.pdf, .txt, .docx)", ".pdf,.txt,.docx"),
        ContentType::Audio => ("Audio File (.mp3, .wav, .ogg)", "audio/*"),
    };
    let show_file_input = content_type != ContentType::Video || video_source == VideoSource::Local;

    rsx! {
        div {
            class: "page",
            div {
                class: "page-inner",
                Navbar {
                    title: "Upload New Lesson",
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| on_back.call(()),
                        "Dashboard"
                    }
                    LogoutButton { class: "logout-btn" }
                }

                div {
                    class: "card upload-card",
                    form {
                        onsubmit: handle_submit,

                        label { "Lesson Title" }
                        input {
                            r#type: "text",
                            placeholder: "Enter title",
                            required: true,
                            value: title,
                            oninput: move |evt: FormEvent| flow.write().draft_mut().title = evt.value(),
                        }

                        label { "About" }
                        textarea {
                            placeholder: "Brief description of the lesson",
                            required: true,
                            value: description,
                            oninput: move |evt: FormEvent| flow.write().draft_mut().description = evt.value(),
                        }

                        label { "Category" }
                        input {
                            r#type: "text",
                            placeholder: "e.g., Programming, Math, Science",
                            required: true,
                            value: category,
                            oninput: move |evt: FormEvent| flow.write().draft_mut().category = evt.value(),
                        }

                        label { "Content Type" }
                        div {
                            class: "radio-group",
                            for option in ContentType::ALL {
                                label {
                                    key: "{option}",
                                    input {
                                        r#type: "radio",
                                        name: "content-type",
                                        value: option.as_str(),
                                        checked: content_type == option,
                                        onchange: move |_| flow.write().draft_mut().set_content_type(option),
                                    }
                                    "{option.label()}"
                                }
                            }
                        }

                        if content_type == ContentType::Video {
                            label { "Video Source" }
                            div {
                                class: "radio-group",
                                label {
                                    input {
                                        r#type: "radio",
                                        name: "video-source",
                                        value: "local",
                                        checked: video_source == VideoSource::Local,
                                        onchange: move |_| flow.write().draft_mut().set_video_source(VideoSource::Local),
                                    }
                                    "Local Upload"
                                }
                                label {
                                    input {
                                        r#type: "radio",
                                        name: "video-source",
                                        value: "youtube",
                                        checked: video_source == VideoSource::Youtube,
                                        onchange: move |_| flow.write().draft_mut().set_video_source(VideoSource::Youtube),
                                    }
                                    "YouTube Link"
                                }
                            }
                        }

                        if show_file_input {
                            label { "{file_label}" }
                            input {
                                // keyed so a toggle remounts the input and drops the browser's selection
                                key: "{content_type}-{video_source.as_str()}",
                                r#type: "file",
                                accept: accept,
                                required: !has_file,
                                onchange: handle_file,
                            }
                        } else {
                            label { "YouTube URL" }
                            input {
                                r#type: "url",
                                placeholder: "e.g., https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                                required: true,
                                value: youtube_url,
                                oninput: move |evt: FormEvent| flow.write().draft_mut().set_youtube_url(evt.value()),
                            }
                        }

                        button {
                            class: "btn",
                            r#type: "submit",
                            disabled: pending,
                            if pending { "Uploading..." } else { "Upload" }
                        }
                    }

                    if let Some(notice) = notice {
                        p {
                            class: match notice.level {
                                NoticeLevel::Success => "message message--success",
                                NoticeLevel::Error => "message message--error",
                            },
                            "{notice.text}"
                        }
                    }

                    if media_failed() {
                        p {
                            class: "message message--error",
                            "Failed to load the uploaded media. Check that it was uploaded and served correctly."
                        }
                    }

                    if let Some(preview) = preview {
                        div {
                            class: "lesson-preview",
                            match preview {
                                Preview::YoutubeEmbed(url) => rsx! {
                                    iframe {
                                        width: "100%",
                                        height: "315",
                                        src: "{url}",
                                        title: "YouTube video player",
                                        "frameborder": "0",
                                        allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                                        "allowfullscreen": "true",
                                    }
                                },
                                Preview::Video(url) => rsx! {
                                    video {
                                        controls: true,
                                        width: "100%",
                                        src: "{url}",
                                        onerror: move |_| media_failed.set(true),
                                    }
                                },
                                Preview::Audio(url) => rsx! {
                                    audio {
                                        controls: true,
                                        src: "{url}",
                                        onerror: move |_| media_failed.set(true),
                                    }
                                },
                                Preview::Document(url) => rsx! {
                                    p {
                                        "Text file uploaded. "
                                        a {
                                            href: "{url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "View/Download File"
                                        }
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
