//! Data models for `cgpa-analytics`

pub mod course;

pub use course::Course;
