pub mod grading;
pub mod responses;

pub use grading::{Grade, percentage, round2};
