//! HTTP endpoint handlers. These are thin wrappers that forward to the state.
//! Each handler is instrumented and logs ids and basic result info, never answer texts.

use std::sync::Arc;
use axum::{extract::{Path, State}, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::error::Result;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_list_tasks(State(state): State<Arc<AppState>>) -> Json<Vec<TaskSummary>> {
  Json(state.tasks().map(TaskSummary::from).collect())
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_get_task(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<TaskOut>> {
  let task = state.load_task(&id)?;
  info!(target: "codequiz", %id, segments = task.segment_list.len(), "HTTP task served");
  Ok(Json(to_out(&task)))
}

#[instrument(level = "info", skip(state, body), fields(%id, answers = body.answers.len()))]
pub async fn http_post_task_result(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<ResultIn>,
) -> Result<Json<ResultOut>> {
  let (task, report) = state.check_task(&id, &body.answers)?;
  info!(target: "codequiz", %id, correct = report.correct_count, questions = report.question_count, "HTTP result evaluated");
  Ok(Json(ResultOut { report, task: to_out(&task), next: None }))
}

#[instrument(level = "info", skip(state))]
pub async fn http_list_collections(State(state): State<Arc<AppState>>) -> Json<Vec<CollectionOut>> {
  let mut out: Vec<CollectionOut> = state.collections().map(CollectionOut::from).collect();
  out.sort_by(|a, b| a.id.cmp(&b.id));
  Json(out)
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_get_collection(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<CollectionOut>> {
  Ok(Json(CollectionOut::from(state.get_collection(&id)?)))
}

#[instrument(level = "info", skip(state), fields(%id, %pos))]
pub async fn http_get_collection_task(
  State(state): State<Arc<AppState>>,
  Path((id, pos)): Path<(String, usize)>,
) -> Result<Json<CollectionTaskOut>> {
  let task_id = state.collection_task_id(&id, pos)?;
  let task = state.load_task(task_id)?;
  let total = state.get_collection(&id)?.task_count();
  info!(target: "codequiz", collection = %id, %pos, task_id = %task.id, "HTTP collection task served");
  Ok(Json(CollectionTaskOut { collection_id: id, position: pos, total, task: to_out(&task) }))
}

#[instrument(level = "info", skip(state, body), fields(%id, %pos, answers = body.answers.len()))]
pub async fn http_post_collection_result(
  State(state): State<Arc<AppState>>,
  Path((id, pos)): Path<(String, usize)>,
  Json(body): Json<ResultIn>,
) -> Result<Json<ResultOut>> {
  let task_id = state.collection_task_id(&id, pos)?;
  let (task, report) = state.check_task(task_id, &body.answers)?;
  let total = state.get_collection(&id)?.task_count();
  let next = Some(pos + 1).filter(|n| *n < total);
  info!(target: "codequiz", collection = %id, %pos, correct = report.correct_count, questions = report.question_count, "HTTP collection result evaluated");
  Ok(Json(ResultOut { report, task: to_out(&task), next }))
}
