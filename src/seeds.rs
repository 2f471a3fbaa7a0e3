//! Built-in demo content so the server is useful without a task bank.

use crate::domain::{Membership, Task, TaskCollection, TaskSource};

const SEED_LIST_LEN: &str = r#"{"segments": [
  {"type": "text", "content": "What does the following snippet print?"},
  {"type": "source", "content": "xs = [3, 1, 2]\nprint(len(xs))"},
  {"type": "input",
   "content": [{"content": "Output:", "type": "text"}],
   "answer": {"content": "", "type": "text"},
   "solution": {"content": "3", "type": "text"}}
]}"#;

const SEED_SORTED: &str = r#"{"segments": [
  {"type": "text", "content": "Complete the call so that ys is sorted ascending."},
  {"type": "input",
   "content": [{"content": "ys =", "type": "source"}],
   "answer": {"content": "sorted(xs)", "type": "source"},
   "solution": ["sorted(xs)", "list(sorted(xs))"]},
  {"type": "text", "content": "Tick the box if sorted() returns a new list.", "comment": true},
  {"type": "check", "content": [{"content": "sorted() returns a new list", "type": "text"}], "solution": true}
]}"#;

pub fn seed_tasks() -> Vec<Task> {
  let mut len_task = Task::new("seed-len", "Length of a list", SEED_LIST_LEN);
  len_task.tags = vec!["python".into(), "lists".into()];
  len_task.source = TaskSource::Seed;

  let mut sort_task = Task::new("seed-sorted", "Sorting", SEED_SORTED);
  sort_task.tags = vec!["python".into()];
  sort_task.source = TaskSource::Seed;

  vec![len_task, sort_task]
}

pub fn seed_collections() -> Vec<TaskCollection> {
  vec![TaskCollection {
    id: "seed-intro".into(),
    title: "Python warm-up".into(),
    description: "Two short exercises on lists.".into(),
    members: vec![
      Membership { task_id: "seed-len".into(), ordering: 1 },
      Membership { task_id: "seed-sorted".into(), ordering: 2 },
    ],
  }]
}
