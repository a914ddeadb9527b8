//! This crate supplies the _arrange_ phase of your tests through
//! [test fixtures](https://en.wikipedia.org/wiki/Test_fixture#Software): named providers of
//! the data a test needs. A test declares what it needs by naming its arguments after the
//! fixtures, and the fixtures are resolved and injected when the test is invoked.
//!
//! A test is usually made of three phases:
//!
//! - **Arrange**: set up the inputs. That is the job of the fixtures.
//! - **Act**: perform the action under test.
//! - **Assert**: verify the outcome.
//!
//! ## Fixtures and tests
//!
//! Mark a function with [`[fixture]`](macro@fixture) to make it a fixture, and a test with
//! [`[arrange]`](macro@arrange) to have its arguments resolved by name:
//!
//! ```
//! use arrange::*;
//!
//! #[derive(Debug)]
//! struct Fruit { name: String, cubed: bool }
//!
//! #[fixture]
//! fn fruit_bowl() -> Vec<Fruit> {
//!     ["apple", "banana"]
//!         .into_iter()
//!         .map(|name| Fruit { name: name.to_owned(), cubed: false })
//!         .collect()
//! }
//!
//! fn registry() -> Result<FixtureRegistry, RegistryError> {
//!     let mut registry = FixtureRegistry::new();
//!     fruit_bowl::register(&mut registry)?;
//!     Ok(registry)
//! }
//!
//! #[arrange]
//! fn cube_every_fruit(mut fruit_bowl: Vec<Fruit>) {
//!     fruit_bowl.iter_mut().for_each(|f| f.cubed = true);
//!
//!     assert!(fruit_bowl.iter().all(|f| f.cubed));
//! }
//! # fn main() { cube_every_fruit::case(); }
//! ```
//!
//! `#[arrange]` generates a `#[test]` function that collects the fixtures from
//! `registry()` (use `#[arrange(path::to::other)]` to pick another function) and invokes the
//! test. An argument that names no registered fixture makes the test _error_ before its
//! body runs, while a failed assertion makes it _fail_.
//!
//! Fixtures can use other fixtures the same way, and `#[from(name)]` injects a fixture
//! into an argument with a different name:
//!
//! ```
//! use arrange::*;
//!
//! #[fixture]
//! fn twenty_one() -> i32 { 21 }
//!
//! #[fixture]
//! fn injected(#[from(twenty_one)] base: i32) -> i32 { base * 2 }
//!
//! let registry = FixtureRegistry::new();
//! let registry = registry
//!     .with(twenty_one::NAME, twenty_one::provider())
//!     .and_then(|r| r.with(injected::NAME, injected::provider()))
//!     .unwrap();
//!
//! assert_eq!(42, Invoker::new(&registry).resolve::<i32>("injected").unwrap());
//! ```
//!
//! ## Without macros
//!
//! The registry and the invoker are plain Rust: register a [`Provider`] under a name and
//! describe the test with a [`TestCase`]:
//!
//! ```
//! use arrange::*;
//!
//! let registry = FixtureRegistry::new()
//!     .with("answer", Provider::from_fn(|| 42))
//!     .unwrap();
//! let case = TestCase::new("the_answer", &["answer"], |arguments| {
//!     assert_eq!(42, arguments.take::<i32>("answer")?);
//!     Ok(())
//! });
//!
//! assert_eq!(Outcome::Passed, Invoker::new(&registry).invoke(&case));
//! ```
//!
//! Every request calls the provider again: each test gets its own fresh values and
//! nothing is shared between tests.
pub mod arguments;
pub mod error;
pub mod invoker;
pub mod registry;
pub mod session;

pub use arguments::{Arguments, Value};
pub use arrange_macros::{arrange, fixture};
pub use error::{InvokeError, RegistryError};
pub use invoker::{run_test, Invoker, Outcome, ShouldPanic, TestCase};
pub use registry::{DuplicatePolicy, FixtureRegistry, IntoRegistry, Provider, RegistryConfig};
pub use session::{Session, SessionConfig, Summary};
