//! Task store — the in-memory task collection and its JSON snapshot.
//!
//! All reads and mutations go through one `tokio::sync::Mutex`, and mutating
//! operations write the snapshot before releasing it, so list/append/replace/
//! remove/persist are atomic with respect to each other.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

// ─── Task ─────────────────────────────────────────────────────────────────────

/// A single task record. `id` is caller-supplied and not deduplicated —
/// lookups act on the first match in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub completed: bool,
}

/// The collection every fresh store starts with. Replaced wholesale when a
/// snapshot file exists and parses.
fn seed_tasks() -> Vec<Task> {
    vec![
        Task { id: 1, name: "You can create tasks".to_string(), completed: false },
        Task { id: 2, name: "You can read tasks".to_string(), completed: false },
        Task { id: 3, name: "You can update tasks".to_string(), completed: true },
        Task { id: 4, name: "You can delete tasks".to_string(), completed: false },
    ]
}

// ─── TaskStore ────────────────────────────────────────────────────────────────

pub struct TaskStore {
    snapshot_path: PathBuf,
    tasks: Mutex<Vec<Task>>,
}

impl TaskStore {
    /// Create a store seeded with the default tasks. Call [`load`](Self::load)
    /// afterwards to pick up an existing snapshot.
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            tasks: Mutex::new(seed_tasks()),
        }
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Load the snapshot file if it exists. A missing file keeps the seed
    /// collection (normal first boot); an unreadable or malformed file logs a
    /// warning and keeps the current in-memory state. Never fails startup.
    pub async fn load(&self) {
        let bytes = match fs::read(&self.snapshot_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.snapshot_path.display(), "no snapshot — starting with seed tasks");
                return;
            }
            Err(e) => {
                warn!(path = %self.snapshot_path.display(), err = %e, "failed to read snapshot — keeping in-memory tasks");
                return;
            }
        };

        match serde_json::from_slice::<Vec<Task>>(&bytes) {
            Ok(loaded) => {
                let mut tasks = self.tasks.lock().await;
                *tasks = loaded;
            }
            Err(e) => {
                warn!(path = %self.snapshot_path.display(), err = %e, "malformed snapshot — keeping in-memory tasks");
            }
        }
    }

    /// Snapshot of the collection at call time, in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.lock().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.tasks.lock().await.len()
    }

    /// Append to the end of the collection and persist. The task is stored
    /// exactly as given — no id assignment, no uniqueness check.
    pub async fn append(&self, task: Task) -> Task {
        let mut tasks = self.tasks.lock().await;
        tasks.push(task.clone());
        self.persist_locked(&tasks).await;
        task
    }

    /// First task with the given id, if any.
    pub async fn find_by_id(&self, id: i64) -> Option<Task> {
        let tasks = self.tasks.lock().await;
        tasks.iter().find(|t| t.id == id).cloned()
    }

    /// Overwrite the first task with the given id in place and persist.
    /// Returns the new value, or `None` if no task matched.
    pub async fn replace_by_id(&self, id: i64, new_task: Task) -> Option<Task> {
        let mut tasks = self.tasks.lock().await;
        let slot = tasks.iter_mut().find(|t| t.id == id)?;
        *slot = new_task.clone();
        self.persist_locked(&tasks).await;
        Some(new_task)
    }

    /// Remove the first task with the given id and persist, preserving the
    /// relative order of the rest. Returns the removed task, or `None`.
    pub async fn remove_by_id(&self, id: i64) -> Option<Task> {
        let mut tasks = self.tasks.lock().await;
        let pos = tasks.iter().position(|t| t.id == id)?;
        let removed = tasks.remove(pos);
        self.persist_locked(&tasks).await;
        Some(removed)
    }

    /// Serialize the full collection and overwrite the snapshot.
    pub async fn persist(&self) -> Result<()> {
        let tasks = self.tasks.lock().await;
        write_snapshot(&self.snapshot_path, &tasks).await
    }

    /// Persist while the caller already holds the lock. A failed write is
    /// logged and swallowed: the in-memory mutation stands and the request
    /// still succeeds, at the cost of durability until the next write.
    async fn persist_locked(&self, tasks: &[Task]) {
        if let Err(e) = write_snapshot(&self.snapshot_path, tasks).await {
            warn!(path = %self.snapshot_path.display(), err = %e, "failed to persist snapshot");
        }
    }
}

/// Full rewrite, done atomically: write to a `.tmp` sibling, then rename, so
/// a crash mid-write never leaves a truncated snapshot behind.
async fn write_snapshot(path: &Path, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks).context("failed to serialize tasks")?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create snapshot directory '{}'", parent.display()))?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)
        .await
        .with_context(|| format!("failed to write '{}'", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .await
        .with_context(|| format!("failed to rename '{}' into place", tmp_path.display()))?;

    Ok(())
}
