//! Application state: in-memory task and collection stores.
//!
//! Stores are filled once at startup (TOML task bank, then built-in seeds)
//! and are read-only afterwards. Every request works on its own copy of a
//! task, so parsing and answer checking never share mutable state.

use std::collections::HashMap;

use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::config::{load_quiz_config_from_env, QuizConfig};
use crate::domain::{Task, TaskCollection, TaskSource};
use crate::error::{Error, Result};
use crate::preprocess::{evaluate_task, preprocess_task_from_db, TaskReport};
use crate::seeds::{seed_collections, seed_tasks};
use crate::segment::Submission;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    tasks: HashMap<String, Task>,
    /// Task ids in load order, for listings.
    task_order: Vec<String>,
    collections: HashMap<String, TaskCollection>,
}

impl AppState {
    /// Build state from env: load the task bank (if any) and the built-in seeds.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::from_config(load_quiz_config_from_env())
    }

    pub fn from_config(cfg: Option<QuizConfig>) -> Self {
        let mut state = Self::default();

        if let Some(cfg) = &cfg {
            for tc in &cfg.tasks {
                let id = tc.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
                let body = match tc.read_body() {
                    Ok(b) => b,
                    Err(e) => {
                        error!(target: "codequiz", %id, title = %tc.title, error = %e, "Skipping bank task: no body");
                        continue;
                    }
                };
                let mut task = Task::new(id, tc.title.clone(), body);
                task.author = tc.author.clone();
                task.tags = tc.tags.clone();
                task.revision = tc.revision;
                task.source = TaskSource::LocalBank;
                state.insert_task(task);
            }
            for cc in &cfg.collections {
                state.insert_collection(TaskCollection {
                    id: cc.id.clone(),
                    title: cc.title.clone(),
                    description: cc.description.clone(),
                    members: cc.members.clone(),
                });
            }
        }

        // Seeds never overwrite bank entries with the same id.
        for t in seed_tasks() {
            if !state.tasks.contains_key(&t.id) {
                state.insert_task(t);
            }
        }
        for c in seed_collections() {
            if !state.collections.contains_key(&c.id) {
                state.insert_collection(c);
            }
        }

        for c in state.collections.values() {
            for task_id in c.ordered_task_ids() {
                if !state.tasks.contains_key(task_id) {
                    warn!(target: "codequiz", collection = %c.id, %task_id, "Collection references unknown task");
                }
            }
        }
        info!(target: "codequiz", tasks = state.tasks.len(), collections = state.collections.len(), "Startup task inventory");
        state
    }

    fn insert_task(&mut self, task: Task) {
        if !self.tasks.contains_key(&task.id) {
            self.task_order.push(task.id.clone());
        }
        self.tasks.insert(task.id.clone(), task);
    }

    fn insert_collection(&mut self, c: TaskCollection) {
        self.collections.insert(c.id.clone(), c);
    }

    /// Tasks in load order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.task_order.iter().filter_map(move |id| self.tasks.get(id))
    }

    pub fn collections(&self) -> impl Iterator<Item = &TaskCollection> {
        self.collections.values()
    }

    pub fn get_task(&self, id: &str) -> Result<&Task> {
        self.tasks.get(id).ok_or_else(|| Error::NotFound(format!("task {}", id)))
    }

    pub fn get_collection(&self, id: &str) -> Result<&TaskCollection> {
        self.collections.get(id).ok_or_else(|| Error::NotFound(format!("collection {}", id)))
    }

    /// Id of the task at `pos` in a collection's run order.
    pub fn collection_task_id(&self, collection_id: &str, pos: usize) -> Result<&str> {
        let c = self.get_collection(collection_id)?;
        c.task_id_at(pos)
            .ok_or_else(|| Error::NotFound(format!("position {} in collection {}", pos, collection_id)))
    }

    /// A fresh, preprocessed copy of a stored task.
    #[instrument(level = "debug", skip(self), fields(%id))]
    pub fn load_task(&self, id: &str) -> Result<Task> {
        let mut task = self.get_task(id)?.clone();
        preprocess_task_from_db(&mut task)?;
        Ok(task)
    }

    /// Preprocess a stored task and check a submission against it.
    #[instrument(level = "info", skip(self, submission), fields(%id, answers = submission.len()))]
    pub fn check_task(&self, id: &str, submission: &Submission) -> Result<(Task, TaskReport)> {
        let mut task = self.load_task(id)?;
        let report = evaluate_task(&mut task, submission)?;
        Ok((task, report))
    }
}
