//! `run` - the single entry point: partition the vector, then build the runnable.

use crate::dispatch::Runnable;
use crate::domain::LaunchError;
use crate::partition::{Partition, partition};
use crate::registry::AppRegistry;

/// Splits `args` using `registry` and returns the launcher's own (unclaimed)
/// arguments together with a `Runnable` for the selected applications.
///
/// On error nothing is returned to run.
///
/// ```ignore
/// let (own_args, runnable) = ensemble_core::run(&registry, std::env::args())?;
/// runnable.run(CancellationToken::new()).await?;
/// ```
pub fn run<I, S>(registry: &AppRegistry, args: I) -> Result<(Vec<String>, Runnable), LaunchError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let Partition {
        unclaimed,
        invocations,
    } = partition(registry, args)?;
    Ok((unclaimed, Runnable::new(invocations)))
}
