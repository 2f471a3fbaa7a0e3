//! Task preprocessing and evaluation.
//!
//! `preprocess_task_from_db` turns a task's stored JSON body into its segment
//! list; `evaluate_task` runs a submission against every question segment.
//! Both work on a scratch copy and only write back on success, so a failing
//! task never ends up half-processed.

use serde::Serialize;
use serde_json::Value as Json;
use tracing::{debug, info, instrument, warn};

use crate::domain::Task;
use crate::error::{Error, Result};
use crate::segment::{make_segment, QuestionCounter, Segment, Submission};

/// Parse a task body (`{"segments": [...]}`) into segments, numbering
/// questions from 1.
pub fn parse_segment_list(body_data: &str) -> Result<Vec<Segment>> {
  let rd: Json = serde_json::from_str(body_data)?;
  let body = rd
    .as_object()
    .ok_or_else(|| Error::NotAnObject { what: "task body".into() })?;
  let dict_list = body
    .get("segments")
    .ok_or_else(|| Error::missing("task body", "segments"))?
    .as_array()
    .ok_or_else(|| Error::wrong_type("task body", "segments", "a list"))?;

  let mut counter = QuestionCounter::new();
  let segments = dict_list
    .iter()
    .enumerate()
    .map(|(idx, d)| make_segment(d, idx, &mut counter))
    .collect::<Result<Vec<_>>>()?;
  debug!(target: "segment", segments = segments.len(), questions = counter.issued(), "task body parsed");
  Ok(segments)
}

/// Fill `segment_list` from `body_data` and reset `solution_flag`.
#[instrument(level = "info", target = "segment", skip(task), fields(task_id = %task.id))]
pub fn preprocess_task_from_db(task: &mut Task) -> Result<()> {
  match parse_segment_list(&task.body_data) {
    Ok(segments) => {
      task.segment_list = segments;
      task.solution_flag = false;
      Ok(())
    }
    Err(e) => {
      warn!(target: "segment", task_id = %task.id, error = %e, "task body rejected");
      Err(e)
    }
  }
}

/// Outcome for one segment of an evaluated task.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SegmentOutcome {
  pub idx: usize,
  pub kind: &'static str,
  /// `None` for segments without a solution.
  pub correct: Option<bool>,
}

/// Result of checking one submission against a whole task.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TaskReport {
  pub task_id: String,
  pub question_count: usize,
  pub correct_count: usize,
  pub all_correct: bool,
  pub segments: Vec<SegmentOutcome>,
}

/// Check `submission` against every question segment of a preprocessed task.
///
/// On success the segments' contexts carry the outcome and `solution_flag`
/// is set. On failure the task is left as it was.
#[instrument(level = "info", target = "segment", skip(task, submission), fields(task_id = %task.id, answers = submission.len()))]
pub fn evaluate_task(task: &mut Task, submission: &Submission) -> Result<TaskReport> {
  let mut segments = task.segment_list.clone();
  for segment in segments.iter_mut() {
    segment.update_user_solution(submission)?;
  }

  let outcomes: Vec<SegmentOutcome> = segments
    .iter()
    .enumerate()
    .map(|(pos, s)| SegmentOutcome {
      idx: s.idx().unwrap_or(pos),
      kind: s.type_str(),
      correct: s.user_was_correct(),
    })
    .collect();
  let question_count = segments.iter().filter(|s| s.is_question()).count();
  let correct_count = outcomes.iter().filter(|o| o.correct == Some(true)).count();

  task.segment_list = segments;
  task.solution_flag = true;

  info!(target: "segment", task_id = %task.id, question_count, correct_count, "submission evaluated");
  Ok(TaskReport {
    task_id: task.id.clone(),
    question_count,
    correct_count,
    all_correct: correct_count == question_count,
    segments: outcomes,
  })
}
