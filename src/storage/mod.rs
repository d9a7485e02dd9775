//! Storage layer for the planner daemon.
//!
//! Provides SQLite-based storage with:
//! - Schema bootstrap on first start
//! - Student account operations
//! - Course catalog and prerequisite queries
//! - Academic plan CRUD

mod courses;
mod plans;
mod schema;
mod store;
mod students;

pub use courses::{Course, PrereqRow, PrereqWithCredits};
pub use plans::{Plan, PlannedCourse};
pub use schema::SCHEMA_SQL;
pub use store::PlanStore;
pub use students::Student;
