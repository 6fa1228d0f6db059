use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::{AppError, AppName};
use crate::handler::AppHandler;

/// One selected sub-application: its name, its argument slice and the handler
/// resolved from the registry.
#[derive(Clone)]
pub struct Invocation {
    name: AppName,
    args: Vec<String>,
    handler: Arc<dyn AppHandler>,
}

impl Invocation {
    pub fn new(name: AppName, args: Vec<String>, handler: Arc<dyn AppHandler>) -> Self {
        Self {
            name,
            args,
            handler,
        }
    }

    pub fn name(&self) -> &AppName {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn handler(&self) -> &Arc<dyn AppHandler> {
        &self.handler
    }

    pub(crate) fn push_arg(&mut self, arg: String) {
        self.args.push(arg);
    }

    /// Runs the handler with a copy of the argument slice.
    pub async fn invoke(&self, ctx: CancellationToken) -> Result<(), AppError> {
        self.handler.run(ctx, self.args.clone()).await
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("name", &self.name)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}
