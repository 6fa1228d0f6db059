//! Handler trait - the entry point of a sub-application.
//!
//! - `AppHandler`: object-safe async trait, stored as `Arc<dyn AppHandler>` in the registry
//! - `FnHandler`: adapter so a plain async closure can be registered

use std::future::Future;
use std::marker::PhantomData;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::AppError;

/// AppHandler runs one sub-application with its own argument slice.
///
/// # 使用例
/// ```ignore
/// struct Server;
///
/// #[async_trait]
/// impl AppHandler for Server {
///     async fn run(&self, ctx: CancellationToken, args: Vec<String>) -> Result<(), AppError> {
///         ctx.cancelled().await;
///         Ok(())
///     }
/// }
/// ```
///
/// # Cancellation
/// Cancellation is cooperative. A handler must watch `ctx` and return promptly
/// once it is cancelled; the launcher never aborts a running handler.
#[async_trait]
pub trait AppHandler: Send + Sync {
    async fn run(&self, ctx: CancellationToken, args: Vec<String>) -> Result<(), AppError>;
}

/// FnHandler wraps an async closure `Fn(CancellationToken, Vec<String>) -> Future`.
pub struct FnHandler<F, Fut> {
    f: F,
    _marker: PhantomData<fn() -> Fut>,
}

/// Adapts an async closure into an [`AppHandler`].
///
/// ```ignore
/// let echo = handler_fn(|_ctx, args| async move {
///     println!("{}", args.join(" "));
///     Ok(())
/// });
/// ```
pub fn handler_fn<F, Fut>(f: F) -> FnHandler<F, Fut>
where
    F: Fn(CancellationToken, Vec<String>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), AppError>> + Send + 'static,
{
    FnHandler {
        f,
        _marker: PhantomData,
    }
}

#[async_trait]
impl<F, Fut> AppHandler for FnHandler<F, Fut>
where
    F: Fn(CancellationToken, Vec<String>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), AppError>> + Send + 'static,
{
    async fn run(&self, ctx: CancellationToken, args: Vec<String>) -> Result<(), AppError> {
        (self.f)(ctx, args).await
    }
}
