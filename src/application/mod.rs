//! Application layer: Use cases and services.
//!
//! Scoring and recommendation are pure functions; `AssessmentService`
//! wires them to the report port.

mod assessment;
pub mod recommender;
pub mod report;
pub mod scorer;

pub use assessment::AssessmentService;
pub use recommender::recommend;
pub use scorer::score;
