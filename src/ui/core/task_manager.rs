use super::actions::Action;
use crate::api::ResourceSource;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

const FETCH_DESCRIPTION: &str = "Fetch resources";

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<TaskResult>,
    pub description: String,
    pub started_at: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskResult {
    FetchCompleted { loaded: usize, skipped: usize },
    FetchFailed(String),
}

/// Runs background work on the tokio runtime and reports back with [`Action`]s
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn the resource fetch. The outcome arrives as `ResourcesLoaded` or `FetchFailed`.
    pub fn spawn_fetch(&mut self, source: Arc<dyn ResourceSource>) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = format!("{} from {}", FETCH_DESCRIPTION, source.describe());

        let handle = tokio::spawn(async move {
            match source.fetch_resources().await {
                Ok(outcome) => {
                    let result = TaskResult::FetchCompleted {
                        loaded: outcome.resources.len(),
                        skipped: outcome.skipped.len(),
                    };
                    let _ = action_sender.send(Action::ResourcesLoaded(outcome));
                    result
                }
                Err(e) => {
                    let error_msg = e.to_string();
                    let _ = action_sender.send(Action::FetchFailed(error_msg.clone()));
                    TaskResult::FetchFailed(error_msg)
                }
            }
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: Instant::now(),
            },
        );
        task_id
    }

    /// Drop finished tasks and return their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Task {} '{}' finished after {:?}",
                    task.id,
                    task.description,
                    task.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Check if a fetch is currently running
    pub fn is_fetching(&self) -> bool {
        self.tasks
            .values()
            .any(|task| task.description.starts_with(FETCH_DESCRIPTION) && !task.handle.is_finished())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
