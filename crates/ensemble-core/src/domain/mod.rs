//! Domain model (app names, invocation entries, errors).

pub mod app_name;
pub mod errors;
pub mod invocation;

pub use self::app_name::AppName;
pub use self::errors::{AppError, BoxError, LaunchError};
pub use self::invocation::Invocation;
