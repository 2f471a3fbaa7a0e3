//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Task, TaskCollection, TaskSource};
use crate::preprocess::TaskReport;
use crate::segment::{Context, Segment, Submission};

/// One segment as handed to the renderer.
#[derive(Debug, Serialize)]
pub struct SegmentOut {
    pub kind: &'static str,
    pub template: &'static str,
    pub context: Context,
}

impl From<&Segment> for SegmentOut {
    fn from(s: &Segment) -> Self {
        Self { kind: s.type_str(), template: s.template(), context: s.context().clone() }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub tags: Vec<String>,
    pub revision: u32,
    pub source: TaskSource,
}

impl From<&Task> for TaskSummary {
    fn from(t: &Task) -> Self {
        Self {
            id: t.id.clone(),
            title: t.title.clone(),
            author: t.author.clone(),
            tags: t.tags.clone(),
            revision: t.revision,
            source: t.source.clone(),
        }
    }
}

/// A preprocessed task, ready to render.
#[derive(Debug, Serialize)]
pub struct TaskOut {
    #[serde(flatten)]
    pub summary: TaskSummary,
    pub solution_flag: bool,
    pub segments: Vec<SegmentOut>,
}

pub fn to_out(t: &Task) -> TaskOut {
    TaskOut {
        summary: TaskSummary::from(t),
        solution_flag: t.solution_flag,
        segments: t.segment_list.iter().map(SegmentOut::from).collect(),
    }
}

/// Submitted answers: `{"answers": {"1": "42", "3": "x"}}`.
#[derive(Debug, Deserialize)]
pub struct ResultIn {
    #[serde(default)]
    pub answers: Submission,
}

#[derive(Debug, Serialize)]
pub struct ResultOut {
    pub report: TaskReport,
    pub task: TaskOut,
    /// Next position when running a collection; null at its end and for standalone tasks.
    pub next: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CollectionOut {
    pub id: String,
    pub title: String,
    pub description: String,
    pub task_ids: Vec<String>,
}

impl From<&TaskCollection> for CollectionOut {
    fn from(c: &TaskCollection) -> Self {
        Self {
            id: c.id.clone(),
            title: c.title.clone(),
            description: c.description.clone(),
            task_ids: c.ordered_task_ids().into_iter().map(String::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CollectionTaskOut {
    pub collection_id: String,
    pub position: usize,
    pub total: usize,
    pub task: TaskOut,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
