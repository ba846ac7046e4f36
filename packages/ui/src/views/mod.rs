mod landing;
pub use landing::LandingPage;

mod auth_form;
pub use auth_form::AuthForm;

mod tutor_dashboard;
pub use tutor_dashboard::TutorDashboard;

mod student_page;
pub use student_page::StudentPage;

mod upload_page;
pub use upload_page::UploadPage;
