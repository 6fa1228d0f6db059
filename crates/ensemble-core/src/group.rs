//! TaskGroup - fail-fast group of sibling tasks.
//!
//! - Every task gets a token derived from the group token, which is itself a
//!   child of the caller's context.
//! - The first failure (or cancellation of the caller's context) cancels the
//!   group token, so every live sibling sees cancellation.
//! - A failure is recorded when the task returns, not when `wait()` joins it.
//! - `wait()` joins *all* tasks and returns the first failure, or `Ok(())`.
//!
//! Dropping the group before `wait()` completes aborts the remaining tasks.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, OnceLock};

use tokio::task::{Id, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::domain::{AppError, AppName};

pub struct TaskGroup {
    parent: CancellationToken,
    token: CancellationToken,
    first: Arc<OnceLock<AppError>>,
    tasks: JoinSet<()>,
    names: HashMap<Id, AppName>,
}

impl TaskGroup {
    pub fn new(parent: CancellationToken) -> Self {
        let token = parent.child_token();
        Self {
            parent,
            token,
            first: Arc::new(OnceLock::new()),
            tasks: JoinSet::new(),
            names: HashMap::new(),
        }
    }

    /// Token shared by the group; cancelled on the first failure.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Spawn a task. `task` receives its own context derived from the group token.
    pub fn spawn<T, F>(&mut self, name: AppName, task: T)
    where
        T: FnOnce(CancellationToken) -> F,
        F: Future<Output = Result<(), AppError>> + Send + 'static,
    {
        let fut = task(self.token.child_token());
        let parent = self.parent.clone();
        let token = self.token.clone();
        let first = Arc::clone(&self.first);
        let task_name = name.clone();

        let handle = self.tasks.spawn(async move {
            match fut.await {
                Ok(()) => tracing::debug!(app = %task_name, "application finished"),
                // 外側がすでにキャンセル済みなら、その失敗はキャンセルの結果とみなす
                Err(err) if parent.is_cancelled() => {
                    tracing::debug!(
                        app = %task_name,
                        error = %err,
                        "application stopped after cancellation"
                    );
                    record(&first, &token, &task_name, AppError::Cancelled);
                }
                Err(err) => record(&first, &token, &task_name, err),
            }
        });
        tracing::debug!(app = %name, pending = self.tasks.len(), "application spawned");
        self.names.insert(handle.id(), name);
    }

    /// Join every task. Returns the first failure recorded.
    pub async fn wait(mut self) -> Result<(), AppError> {
        let mut parent_seen = false;

        loop {
            tokio::select! {
                biased;

                // 外側の context がキャンセルされたら全タスクに伝播させる
                _ = self.parent.cancelled(), if !parent_seen => {
                    parent_seen = true;
                    tracing::info!(
                        running = self.tasks.len(),
                        "context cancelled, stopping applications"
                    );
                    // a failure recorded before this point keeps precedence
                    let _ = self.first.set(AppError::Cancelled);
                    self.token.cancel();
                }
                joined = self.tasks.join_next_with_id() => {
                    let Some(joined) = joined else {
                        break;
                    };
                    match joined {
                        Ok((id, ())) => {
                            self.names.remove(&id);
                        }
                        // Tasks are only aborted when the group is dropped, which cannot
                        // happen while `wait` runs, so a join error here is a panic.
                        Err(err) => {
                            let app = self
                                .names
                                .remove(&err.id())
                                .unwrap_or_else(|| AppName::new("<unknown>"));
                            let panicked = AppError::Panicked { app: app.clone() };
                            record(&self.first, &self.token, &app, panicked);
                        }
                    }
                }
            }
        }

        // every task has been joined, so no clone of `first` is left
        match Arc::into_inner(self.first).and_then(OnceLock::into_inner) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Keeps `err` if it is the first failure of the group and cancels the siblings.
fn record(first: &OnceLock<AppError>, token: &CancellationToken, app: &AppName, err: AppError) {
    match first.set(err) {
        Ok(()) => {
            if let Some(err) = first.get() {
                tracing::warn!(
                    app = %app,
                    error = %err,
                    "application failed, cancelling the others"
                );
            }
            token.cancel();
        }
        Err(err) => {
            tracing::debug!(
                app = %app,
                error = %err,
                "application stopped after group cancellation"
            );
        }
    }
}
