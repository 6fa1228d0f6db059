//! ensemble-core
//!
//! Runs several independent applications from one command line:
//!
//! ```text
//! box --verbose api --port 8080 worker --queue jobs
//! └─┬┘ └───┬───┘ └──────┬──────┘ └───────┬──────┘
//!  prog  unclaimed     api             worker
//! ```
//!
//! # モジュール構成
//! - **domain**: AppName, Invocation, errors
//! - **handler**: `AppHandler` trait + `handler_fn` closure adapter
//! - **registry**: `AppRegistry` (name -> handler), supplied by the caller
//! - **partition**: splits the argument vector using registered names as delimiters
//! - **group**: fail-fast `TaskGroup` (first failure cancels siblings)
//! - **dispatch**: `Runnable`, the deferred unit that runs the selected apps
//! - **launch**: `run()` = partition + build

pub mod dispatch;
pub mod domain;
pub mod group;
pub mod handler;
pub mod launch;
pub mod partition;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::dispatch::Runnable;
pub use self::domain::{AppError, AppName, BoxError, Invocation, LaunchError};
pub use self::group::TaskGroup;
pub use self::handler::{AppHandler, FnHandler, handler_fn};
pub use self::launch::run;
pub use self::partition::{Partition, partition};
pub use self::registry::{AppRegistry, RegistryError};

pub use tokio_util::sync::CancellationToken;
