//! Core module: the pure parsing/aggregation/solver engine plus configuration

pub mod config;
pub mod export;
pub mod gpa;
pub mod grades;
pub mod models;
pub mod parser;
pub mod target;
