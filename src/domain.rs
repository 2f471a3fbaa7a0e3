//! Domain models: tasks and task collections.

use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// Where did we get the task from?
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskSource {
  LocalBank, // from the TOML task bank
  Seed,      // built-in demo tasks
}

/// A task as stored: metadata plus the raw JSON body.
///
/// `segment_list` and `solution_flag` are filled by the preprocessor and
/// the evaluator; a freshly loaded task has neither.
#[derive(Clone, Debug)]
pub struct Task {
  pub id: String,
  pub title: String,
  pub author: String,
  pub tags: Vec<String>,
  pub revision: u32,
  pub source: TaskSource,
  pub body_data: String,

  pub segment_list: Vec<Segment>,
  pub solution_flag: bool,
}

impl Task {
  pub fn new(id: impl Into<String>, title: impl Into<String>, body_data: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      author: String::new(),
      tags: Vec::new(),
      revision: 0,
      source: TaskSource::LocalBank,
      body_data: body_data.into(),
      segment_list: Vec::new(),
      solution_flag: false,
    }
  }
}

/// Position of a task inside a collection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Membership {
  pub task_id: String,
  #[serde(default)]
  pub ordering: i32,
}

/// An ordered set of tasks run one after another.
#[derive(Clone, Debug)]
pub struct TaskCollection {
  pub id: String,
  pub title: String,
  pub description: String,
  pub members: Vec<Membership>,
}

impl TaskCollection {
  /// Task ids sorted by `ordering`; equal orderings keep their listed order.
  pub fn ordered_task_ids(&self) -> Vec<&str> {
    let mut members: Vec<&Membership> = self.members.iter().collect();
    members.sort_by_key(|m| m.ordering);
    members.into_iter().map(|m| m.task_id.as_str()).collect()
  }

  pub fn task_id_at(&self, pos: usize) -> Option<&str> {
    self.ordered_task_ids().get(pos).copied()
  }

  pub fn task_count(&self) -> usize {
    self.members.len()
  }
}
