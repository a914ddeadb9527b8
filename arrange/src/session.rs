//! Run several test cases against the same registry.
use tracing::{info, warn};

use crate::invoker::{Invoker, Outcome, TestCase};
use crate::registry::FixtureRegistry;

#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Stop at the first failed or errored case.
    pub fail_fast: bool,
    /// Run only the cases whose name contains this text.
    pub filter: Option<String>,
}

/// Runs test cases one after the other. A failed or errored case doesn't stop
/// the following ones unless [`SessionConfig::fail_fast`] is set.
#[derive(Debug)]
pub struct Session<'r> {
    invoker: Invoker<'r>,
    config: SessionConfig,
}

impl<'r> Session<'r> {
    pub fn new(registry: &'r FixtureRegistry) -> Self {
        Self::with_config(registry, Default::default())
    }

    pub fn with_config(registry: &'r FixtureRegistry, config: SessionConfig) -> Self {
        Self {
            invoker: Invoker::new(registry),
            config,
        }
    }

    pub fn run<'c>(&self, cases: impl IntoIterator<Item = &'c TestCase>) -> Summary {
        let mut summary = Summary::default();
        for case in cases.into_iter().filter(|case| self.selected(case)) {
            let outcome = self.invoker.invoke(case);
            match &outcome {
                Outcome::Passed => info!(test = case.name(), "passed"),
                Outcome::Failed { message } => warn!(test = case.name(), %message, "failed"),
                Outcome::Errored(error) => warn!(test = case.name(), %error, "errored"),
            }
            let stop = self.config.fail_fast && !outcome.is_passed();
            summary.outcomes.push((case.name(), outcome));
            if stop {
                break;
            }
        }
        info!(
            passed = summary.passed(),
            failed = summary.failed(),
            errored = summary.errored(),
            "session complete"
        );
        summary
    }

    fn selected(&self, case: &TestCase) -> bool {
        self.config
            .filter
            .as_deref()
            .map_or(true, |filter| case.name().contains(filter))
    }
}

/// The outcome of every case a [`Session`] ran, in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    outcomes: Vec<(&'static str, Outcome)>,
}

impl Summary {
    pub fn outcomes(&self) -> &[(&'static str, Outcome)] {
        &self.outcomes
    }

    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, outcome)| outcome)
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.count(Outcome::is_passed)
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failed)
    }

    pub fn errored(&self) -> usize {
        self.count(Outcome::is_errored)
    }

    pub fn is_success(&self) -> bool {
        self.passed() == self.total()
    }

    /// Process exit code: `0` when every case passed, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    fn count(&self, predicate: fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| predicate(o)).count()
    }
}
