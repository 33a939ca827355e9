pub mod analytics;
pub mod assessments;
pub mod auth;
pub mod classes;
pub mod marks;
pub mod reports;
pub mod students;
pub mod subjects;

pub use analytics::AnalyticsService;
pub use assessments::AssessmentService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use marks::MarkService;
pub use reports::ReportService;
pub use students::StudentService;
pub use subjects::SubjectService;
