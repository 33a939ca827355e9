pub mod auth;

pub mod classes;

pub mod students;

pub mod subjects;

pub mod assessments;

pub mod marks;

pub mod analytics;

pub mod reports;

pub mod system;

pub use analytics::configure_analytics_routes;
pub use assessments::configure_assessments_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use marks::configure_marks_routes;
pub use reports::configure_reports_routes;
pub use students::configure_students_routes;
pub use subjects::configure_subjects_routes;
pub use system::configure_system_routes;
