//! Prerequisite graph construction.
//!
//! Walks the prerequisite relation rooted at a course and emits the
//! node/edge graph the frontend renders. The walk is an iterative
//! depth-first worklist over a single visited set: finite relation plus a
//! monotonically growing visited set gives termination even when the stored
//! data contains a prerequisite cycle.

use std::collections::HashSet;

use anyhow::Result;
use serde::Serialize;

use crate::storage::{PlanStore, PrereqRow};

/// Source of direct prerequisite rows for a course.
///
/// Implementations return an empty vec both for a course with no recorded
/// prerequisites and for an unknown course ID; the traversal treats the two
/// identically. A fetch failure aborts the whole traversal.
pub trait PrereqSource {
    fn direct_prerequisites(&self, course_id: &str) -> Result<Vec<PrereqRow>>;
}

impl PrereqSource for PlanStore {
    fn direct_prerequisites(&self, course_id: &str) -> Result<Vec<PrereqRow>> {
        Ok(PlanStore::direct_prerequisites(self, course_id)?)
    }
}

/// A graph node; the course ID doubles as the display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
}

/// A directed edge in "must be taken before" direction:
/// `from` is the prerequisite, `to` the course that requires it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// The derived prerequisite graph. Built fresh per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PrereqGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Collect the transitive prerequisite graph rooted at `course_id`.
///
/// A course is marked visited when popped from the worklist, before its own
/// prerequisites are fetched, so every visited course (the root included)
/// appears in the node set and a repeated course is never re-expanded.
/// Nodes are emitted in first-visit order. Edges are emitted once per
/// underlying prerequisite row and are not deduplicated: a prerequisite
/// reachable from several ancestors yields one edge per (ancestor,
/// prerequisite) pair.
pub fn build_prereq_graph(source: &impl PrereqSource, course_id: &str) -> Result<PrereqGraph> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut nodes: Vec<GraphNode> = Vec::new();
    let mut edges: Vec<GraphEdge> = Vec::new();
    let mut stack: Vec<String> = vec![course_id.to_string()];

    while let Some(course) = stack.pop() {
        if !visited.insert(course.clone()) {
            continue;
        }
        nodes.push(GraphNode {
            id: course.clone(),
            label: course.clone(),
        });

        for row in source.direct_prerequisites(&course)? {
            edges.push(GraphEdge {
                from: row.prerequisite_id.clone(),
                to: row.course_id,
            });
            stack.push(row.prerequisite_id);
        }
    }

    Ok(PrereqGraph { nodes, edges })
}
