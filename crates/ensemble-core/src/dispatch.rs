//! Runnable - deferred execution of the selected sub-applications.
//!
//! Building a `Runnable` never fails. Errors only surface from `run()`:
//! - one invocation: its handler is called directly with the caller's context
//!   and the result is returned unchanged;
//! - several invocations: each runs as a sibling task in a fail-fast `TaskGroup`.

use tokio_util::sync::CancellationToken;

use crate::domain::{AppError, Invocation};
use crate::group::TaskGroup;

#[derive(Debug, Clone)]
pub struct Runnable {
    invocations: Vec<Invocation>,
}

impl Runnable {
    pub fn new(invocations: Vec<Invocation>) -> Self {
        Self { invocations }
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    pub fn names(&self) -> Vec<&str> {
        self.invocations.iter().map(|i| i.name().as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    /// Execute under `ctx`. Blocks until every started application has returned.
    pub async fn run(&self, ctx: CancellationToken) -> Result<(), AppError> {
        if let [single] = self.invocations.as_slice() {
            tracing::debug!(app = %single.name(), "running single application");
            return single.invoke(ctx).await;
        }

        let mut group = TaskGroup::new(ctx);
        for invocation in &self.invocations {
            let invocation = invocation.clone();
            group.spawn(invocation.name().clone(), move |ctx| async move {
                invocation.invoke(ctx).await
            });
        }
        group.wait().await
    }
}
