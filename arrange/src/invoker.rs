//! Arrange a test: resolve its parameters by name, then run its body.
use std::any::{type_name, Any};
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, debug_span, trace};

use crate::arguments::{Arguments, Value};
use crate::error::{InvokeError, Result};
use crate::registry::{FixtureRegistry, IntoRegistry};

type Body = dyn Fn(&mut Arguments) -> Result<()>;

/// A test function together with the names of the fixtures it declares as
/// parameters.
pub struct TestCase {
    name: &'static str,
    parameters: Vec<&'static str>,
    body: Box<Body>,
}

impl TestCase {
    /// `body` receives the resolved values in `parameters` order and takes them
    /// by name with [`Arguments::take`].
    pub fn new<F>(name: &'static str, parameters: &[&'static str], body: F) -> Self
    where
        F: Fn(&mut Arguments) -> Result<()> + 'static,
    {
        Self {
            name,
            parameters: parameters.to_vec(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parameters(&self) -> &[&'static str] {
        &self.parameters
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// How a test invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// The body panicked, usually because an assertion did not hold.
    Failed { message: String },
    /// The test could not be arranged; its body may not have run at all.
    Errored(InvokeError),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, Outcome::Errored(_))
    }
}

/// Resolves fixtures from a registry and runs test cases with them.
#[derive(Debug, Clone, Copy)]
pub struct Invoker<'r> {
    registry: &'r FixtureRegistry,
}

impl<'r> Invoker<'r> {
    pub fn new(registry: &'r FixtureRegistry) -> Self {
        Self { registry }
    }

    /// Resolve every parameter of `case` and call its body with them.
    ///
    /// Resolution errors are reported before the body runs. A panic in the
    /// body is caught and reported as [`Outcome::Failed`].
    pub fn invoke(&self, case: &TestCase) -> Outcome {
        let span = debug_span!("invoke", test = case.name());
        let _enter = span.enter();

        let mut arguments = match self.arrange(case) {
            Ok(arguments) => arguments,
            Err(error) => {
                debug!(%error, "cannot arrange test");
                return Outcome::Errored(error);
            }
        };
        match panic::catch_unwind(AssertUnwindSafe(|| (case.body)(&mut arguments))) {
            Ok(Ok(())) => Outcome::Passed,
            Ok(Err(error)) => Outcome::Errored(error),
            Err(payload) => Outcome::Failed {
                message: panic_message(&*payload),
            },
        }
    }

    /// Resolve a single fixture, outside of any test case.
    pub fn resolve<T: 'static>(&self, name: &'static str) -> Result<T> {
        let value = self.provide(name, "<direct>", &mut Vec::new())?;
        value
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| InvokeError::TypeMismatch {
                name: name.to_owned(),
                expected: type_name::<T>(),
            })
    }

    fn arrange(&self, case: &TestCase) -> Result<Arguments> {
        let mut arguments = Arguments::default();
        for &parameter in case.parameters() {
            let value = self.provide(parameter, case.name(), &mut Vec::new())?;
            arguments.push(parameter, value);
        }
        Ok(arguments)
    }

    /// Depth first: dependencies are provided in declaration order before the
    /// fixture itself. `chain` holds the fixtures currently being provided.
    fn provide(
        &self,
        name: &'static str,
        requested_by: &str,
        chain: &mut Vec<&'static str>,
    ) -> Result<Value> {
        if chain.contains(&name) {
            return Err(InvokeError::Cycle {
                chain: chain
                    .iter()
                    .chain(std::iter::once(&name))
                    .map(ToString::to_string)
                    .collect(),
            });
        }
        let provider = self.registry.resolve(name).map_err(|source| {
            InvokeError::Unresolvable {
                parameter: name.to_owned(),
                requested_by: requested_by.to_owned(),
                source,
            }
        })?;

        chain.push(name);
        let mut arguments = Arguments::default();
        for &dependency in provider.dependencies() {
            let value = self.provide(dependency, name, chain)?;
            trace!(fixture = name, dependency, "hand over dependency");
            arguments.push(dependency, value);
        }
        chain.pop();

        debug!(fixture = name, "provide fixture");
        panic::catch_unwind(AssertUnwindSafe(|| provider.provide(&mut arguments))).unwrap_or_else(
            |payload| {
                Err(InvokeError::ProviderPanicked {
                    name: name.to_owned(),
                    message: panic_message(&*payload),
                })
            },
        )
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "Box<dyn Any>".to_owned())
}

/// What the body of a test should do, as declared with `#[should_panic]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShouldPanic {
    #[default]
    No,
    Yes,
    /// The panic message should contain this text.
    Expected(&'static str),
}

/// Run `case` as a `libtest` test: collect the registry, invoke the case and
/// panic unless its outcome is the expected one.
///
/// `should_panic` is checked against a failed body only: a test that cannot be
/// collected or arranged always panics, whatever it expects. The panic message
/// of an unexpected failure is raised again unchanged.
pub fn run_test(registry: impl IntoRegistry, case: &TestCase, should_panic: ShouldPanic) {
    let registry = match registry.into_registry() {
        Ok(registry) => registry,
        Err(error) => panic!("cannot collect fixtures for '{}': {error}", case.name()),
    };
    match (Invoker::new(&registry).invoke(case), should_panic) {
        (Outcome::Errored(error), _) => panic!("cannot arrange '{}': {error}", case.name()),
        (Outcome::Passed, ShouldPanic::No) | (Outcome::Failed { .. }, ShouldPanic::Yes) => {}
        (Outcome::Passed, _) => panic!("'{}' did not panic as expected", case.name()),
        (Outcome::Failed { message }, ShouldPanic::No) => panic::panic_any(message),
        (Outcome::Failed { message }, ShouldPanic::Expected(expected)) => {
            if !message.contains(expected) {
                panic!(
                    "panic did not contain expected string\n      \
                     panic message: {message:?}\n \
                     expected substring: {expected:?}"
                );
            }
        }
    }
}
