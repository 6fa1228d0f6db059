//! Built-in applications of the `ensemble` demo binary.
//!
//! - `echo ARGS...`   prints its arguments and exits
//! - `sleep MILLIS`   sleeps, or stops with `Cancelled` when the group is cancelled
//! - `wait`           runs until cancelled, then exits cleanly
//! - `fail [MSG...]`  fails immediately
//! - `exec CMD ARGS...` runs a child process; killed on cancellation

use std::time::Duration;

use async_trait::async_trait;
use ensemble_core::{
    AppError, AppHandler, AppRegistry, CancellationToken, RegistryError, handler_fn,
};
use tokio::process::Command;

pub fn registry() -> Result<AppRegistry, RegistryError> {
    AppRegistry::new()
        .with(
            "echo",
            handler_fn(|_ctx, args| async move {
                println!("{}", args.join(" "));
                Ok(())
            }),
        )?
        .with("sleep", handler_fn(sleep))?
        .with(
            "wait",
            handler_fn(|ctx: CancellationToken, _args| async move {
                ctx.cancelled().await;
                Ok(())
            }),
        )?
        .with(
            "fail",
            handler_fn(|_ctx, args: Vec<String>| async move {
                let message = if args.is_empty() {
                    "failed".to_string()
                } else {
                    args.join(" ")
                };
                Err(AppError::failed(message))
            }),
        )?
        .with("exec", Exec)
}

async fn sleep(ctx: CancellationToken, args: Vec<String>) -> Result<(), AppError> {
    let millis: u64 = match args.as_slice() {
        [millis] => millis
            .parse()
            .map_err(|_| AppError::failed(format!("sleep: invalid duration '{millis}'")))?,
        _ => return Err(AppError::failed("usage: sleep MILLIS")),
    };

    tokio::select! {
        _ = tokio::time::sleep(Duration::from_millis(millis)) => Ok(()),
        _ = ctx.cancelled() => Err(AppError::Cancelled),
    }
}

/// Runs `args[0]` with the remaining args as a child process.
pub struct Exec;

#[async_trait]
impl AppHandler for Exec {
    async fn run(&self, ctx: CancellationToken, args: Vec<String>) -> Result<(), AppError> {
        let Some((program, rest)) = args.split_first() else {
            return Err(AppError::failed("usage: exec CMD [ARGS...]"));
        };

        let mut child = Command::new(program)
            .args(rest)
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| AppError::failed(format!("exec {program}: {e}")))?;
        tracing::debug!(program = %program, pid = ?child.id(), "child started");

        tokio::select! {
            status = child.wait() => {
                let status = status.map_err(AppError::failed)?;
                if status.success() {
                    Ok(())
                } else {
                    Err(AppError::failed(format!("{program} exited with {status}")))
                }
            }
            _ = ctx.cancelled() => {
                // 子プロセスを止めてから戻る
                child.kill().await.map_err(AppError::failed)?;
                Err(AppError::Cancelled)
            }
        }
    }
}
