//! Argument partitioning.
//!
//! `[program, ...unclaimed..., name1, ...args1..., name2, ...args2..., ...]`
//!
//! Registered names are the only delimiters. Everything else is opaque and is
//! appended to whatever slice is currently open.

use std::sync::Arc;

use crate::dispatch::Runnable;
use crate::domain::{AppName, Invocation, LaunchError};
use crate::registry::AppRegistry;

/// Result of splitting an argument vector.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Tokens before the first registered name (the launcher's own arguments).
    pub unclaimed: Vec<String>,
    /// One entry per registered name occurrence, in input order.
    pub invocations: Vec<Invocation>,
}

impl Partition {
    pub fn into_runnable(self) -> Runnable {
        Runnable::new(self.invocations)
    }
}

/// Splits `args` into the unclaimed prefix and one invocation per registered name.
///
/// `args[0]` is the program name and is always skipped, even if it equals a
/// registered name. A name that occurs twice starts two independent invocations.
pub fn partition<I, S>(registry: &AppRegistry, args: I) -> Result<Partition, LaunchError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.len() < 2 {
        return Err(LaunchError::InsufficientArguments { got: args.len() });
    }

    let mut unclaimed = Vec::new();
    let mut invocations: Vec<Invocation> = Vec::new();
    for arg in args.into_iter().skip(1) {
        if let Some(handler) = registry.get(&arg) {
            invocations.push(Invocation::new(
                AppName::new(arg),
                Vec::new(),
                Arc::clone(handler),
            ));
            continue;
        }
        match invocations.last_mut() {
            Some(current) => current.push_arg(arg),
            None => unclaimed.push(arg),
        }
    }

    if invocations.is_empty() {
        return Err(LaunchError::NoApplicationsSelected);
    }

    tracing::debug!(
        unclaimed = unclaimed.len(),
        apps = ?invocations.iter().map(|i| i.name().as_str()).collect::<Vec<_>>(),
        "arguments partitioned"
    );

    Ok(Partition {
        unclaimed,
        invocations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ok_handler, strings};
    use rstest::rstest;

    fn registry() -> AppRegistry {
        AppRegistry::new()
            .with("app1", ok_handler())
            .unwrap()
            .with("app2", ok_handler())
            .unwrap()
    }

    fn entries(partition: &Partition) -> Vec<(&str, Vec<&str>)> {
        partition
            .invocations
            .iter()
            .map(|i| {
                (
                    i.name().as_str(),
                    i.args().iter().map(String::as_str).collect(),
                )
            })
            .collect()
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::empty_string(&[""])]
    #[case::program_only(&["box"])]
    fn too_few_arguments(#[case] args: &[&str]) {
        let err = partition(&registry(), args.iter().copied()).unwrap_err();
        assert_eq!(err, LaunchError::InsufficientArguments { got: args.len() });
    }

    #[rstest]
    #[case::unknown_app(&["box", "noApp"])]
    #[case::flags_only(&["box", "--x", "1"])]
    #[case::name_as_program(&["app1", "--x"])]
    fn no_registered_name(#[case] args: &[&str]) {
        let err = partition(&registry(), args.iter().copied()).unwrap_err();
        assert_eq!(err, LaunchError::NoApplicationsSelected);
    }

    #[test]
    fn adjacent_names_have_empty_args() {
        let p = partition(&registry(), ["box", "app1", "app2"]).unwrap();
        assert!(p.unclaimed.is_empty());
        assert_eq!(entries(&p), vec![("app1", vec![]), ("app2", vec![])]);
    }

    #[test]
    fn unclaimed_prefix_and_single_app() {
        let p = partition(&registry(), ["box", "--x", "1", "app1", "--y", "2"]).unwrap();
        assert_eq!(p.unclaimed, strings(&["--x", "1"]));
        assert_eq!(entries(&p), vec![("app1", vec!["--y", "2"])]);
    }

    #[test]
    #[rustfmt::skip]
    fn full_vector_round_trip() {
        let p = partition(
            &registry(),
            [
                "box",
                "--box-arg1", "box-value1",
                "app1",
                "--app1-arg1", "app1-value1",
                "--app1-arg2", "app1-value2",
                "app2",
                "--app2-arg1", "app2-value1",
            ],
        )
        .unwrap();

        assert_eq!(p.unclaimed, strings(&["--box-arg1", "box-value1"]));
        assert_eq!(
            entries(&p),
            vec![
                (
                    "app1",
                    vec!["--app1-arg1", "app1-value1", "--app1-arg2", "app1-value2"]
                ),
                ("app2", vec!["--app2-arg1", "app2-value1"]),
            ]
        );
    }

    #[test]
    fn duplicate_names_are_not_merged() {
        let p = partition(&registry(), ["box", "app1", "a", "app2", "app1", "b"]).unwrap();
        assert_eq!(
            entries(&p),
            vec![("app1", vec!["a"]), ("app2", vec![]), ("app1", vec!["b"])]
        );
    }

    #[test]
    fn order_follows_input() {
        let p = partition(&registry(), ["box", "app2", "app1"]).unwrap();
        assert_eq!(entries(&p), vec![("app2", vec![]), ("app1", vec![])]);
    }

    #[test]
    fn every_token_lands_once() {
        let input = ["box", "-v", "app1", "x", "y", "app2", "z", "app1"];
        let p = partition(&registry(), input).unwrap();

        let claimed: usize = p.invocations.iter().map(|i| 1 + i.args().len()).sum();
        assert_eq!(p.unclaimed.len() + claimed, input.len() - 1);
    }

    #[test]
    fn accepts_owned_strings() {
        let args = strings(&["box", "app1", "--flag"]);
        let p = partition(&registry(), args).unwrap();
        assert_eq!(entries(&p), vec![("app1", vec!["--flag"])]);
    }

    #[test]
    fn into_runnable_keeps_entries() {
        let p = partition(&registry(), ["box", "app1", "app2"]).unwrap();
        let runnable = p.into_runnable();
        assert_eq!(runnable.len(), 2);
    }
}
