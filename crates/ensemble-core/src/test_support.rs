//! Handlers shared by the unit tests.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::domain::AppError;
use crate::handler::{AppHandler, handler_fn};

type ArgsReceiver = mpsc::UnboundedReceiver<Vec<String>>;

pub(crate) fn ok_handler() -> impl AppHandler + 'static {
    handler_fn(|_ctx, _args| async { Ok(()) })
}

pub(crate) fn failing_handler(message: &'static str) -> impl AppHandler + 'static {
    handler_fn(move |_ctx, _args| async move { Err(AppError::failed(message)) })
}

/// Reports its args right away and succeeds.
pub(crate) fn recording_handler() -> (impl AppHandler + 'static, ArgsReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handler = handler_fn(move |_ctx, args| {
        let tx = tx.clone();
        async move {
            let _ = tx.send(args);
            Ok(())
        }
    });
    (handler, rx)
}

/// Blocks until cancelled, then reports its args and returns `Cancelled`.
pub(crate) fn blocking_handler() -> (impl AppHandler + 'static, ArgsReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handler = handler_fn(move |ctx: CancellationToken, args| {
        let tx = tx.clone();
        async move {
            ctx.cancelled().await;
            let _ = tx.send(args);
            Err(AppError::Cancelled)
        }
    });
    (handler, rx)
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
