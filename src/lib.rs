//! Planner backend library - storage, graph construction, HTTP server.
//!
//! This library provides:
//! - Storage layer (SQLite-based planner database)
//! - Prerequisite graph construction for visualization
//! - REST API router

pub mod graph;
pub mod server;
pub mod storage;
