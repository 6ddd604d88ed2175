//! mathquiz-core — question generation, grading, and scoring.
//!
//! This crate defines the data model (operators, questions, answers), the
//! random question generation engine, and the score report that the
//! `mathquiz` CLI builds on.

pub mod engine;
pub mod error;
pub mod model;
pub mod report;
