extern crate proc_macro;


mod error;
mod parse;
mod refident;
mod render;
mod resolver;
mod utils;

use syn::{parse_macro_input, ItemFn};

use crate::parse::{arrange::ArrangeInfo, fixture::FixtureInfo};
use parse::ExtendWithFunctionAttrs;
use quote::ToTokens;

/// Define a fixture: a named provider of test data. You should just mark your function as
/// `#[fixture]` and register it; any test or fixture with an argument of the same name receives
/// a fresh value from it. Fixture functions can also use other fixtures.
///
/// ```
/// use arrange::*;
///
/// #[fixture]
/// fn twenty_one() -> i32 { 21 }
///
/// #[fixture]
/// fn two() -> i32 { 2 }
///
/// #[fixture]
/// fn injected(twenty_one: i32, two: i32) -> i32 { twenty_one * two }
///
/// let mut registry = FixtureRegistry::new();
/// twenty_one::register(&mut registry).unwrap();
/// two::register(&mut registry).unwrap();
/// injected::register(&mut registry).unwrap();
///
/// assert_eq!(42, Invoker::new(&registry).resolve::<i32>("injected").unwrap());
/// ```
///
/// The attribute keeps your function as it is and adds a companion item with the same name
/// that exposes:
///
/// - `NAME`: the fixture name, the same as the function's
/// - `DEPENDENCIES`: the names of the fixtures it needs, in argument order
/// - `get(...)`: calls the fixture with explicit values
/// - `provider()`: a [`Provider`] that resolves the dependencies and calls the fixture
/// - `register(&mut registry)`: registers `provider()` under `NAME`
///
/// # Rename
///
/// Use `#[from(name)]` to inject a fixture into an argument with a different name. It's
/// also the only way to destruct a fixture value in the arguments:
///
/// ```
/// use arrange::*;
///
/// #[fixture]
/// fn pair() -> (i32, i32) { (21, 2) }
///
/// #[fixture]
/// fn product(#[from(pair)] (a, b): (i32, i32)) -> i32 { a * b }
///
/// let registry = FixtureRegistry::new()
///     .with(pair::NAME, pair::provider())
///     .and_then(|r| r.with(product::NAME, product::provider()))
///     .unwrap();
///
/// assert_eq!(42, Invoker::new(&registry).resolve::<i32>("product").unwrap());
/// ```
///
/// # Restrictions
///
/// Fixtures are resolved by name and concrete type, so generic, `impl Trait`, `async` or
/// method fixtures are refused at compile time.
///
/// [`Provider`]: https://docs.rs/arrange/latest/arrange/registry/struct.Provider.html
#[proc_macro_attribute]
pub fn fixture(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let mut info: FixtureInfo = parse_macro_input!(args as FixtureInfo);
    let mut fixture = parse_macro_input!(input as ItemFn);

    let extend_result = info.extend_with_function_attrs(&mut fixture);

    let mut errors = error::fixture(&fixture, &info);

    if let Err(attrs_errors) = extend_result {
        attrs_errors.to_tokens(&mut errors);
    }

    if errors.is_empty() {
        render::fixture(fixture, info)
    } else {
        errors
    }
    .into()
}

/// Write a test whose arguments are fixtures resolved by name. The generated `#[test]`
/// collects the fixtures from a function returning the registry (`registry()` by default)
/// and invokes the test body with freshly provided values.
///
/// ```
/// use arrange::*;
///
/// #[fixture]
/// fn fruit_bowl() -> Vec<&'static str> { vec!["apple", "banana"] }
///
/// fn fruit_fixtures() -> Result<FixtureRegistry, RegistryError> {
///     FixtureRegistry::new().with(fruit_bowl::NAME, fruit_bowl::provider())
/// }
///
/// #[arrange(fruit_fixtures)]
/// fn two_fruit(fruit_bowl: Vec<&'static str>) {
///     assert_eq!(2, fruit_bowl.len());
/// }
/// # fn main() {
/// #     let registry = fruit_fixtures().unwrap();
/// #     assert!(Invoker::new(&registry).invoke(&two_fruit::case()).is_passed());
/// # }
/// ```
///
/// The registry function can return either a `FixtureRegistry` or a
/// `Result<FixtureRegistry, RegistryError>`: a registry that cannot be built makes the test
/// panic before anything is invoked.
///
/// Beyond the `#[test]` function, the attribute adds a companion item with the same name
/// that exposes:
///
/// - `NAME`: the test name
/// - `PARAMETERS`: the fixture names the test asks for, in argument order
/// - `case()`: a [`TestCase`] to run with an `Invoker` or a `Session`
///
/// Any attribute on the test, like `#[ignore]`, is moved to the generated `#[test]` function.
/// `#[should_panic]` is the exception: it is checked by `arrange::run_test` against the
/// outcome of the body only, so a test that cannot be arranged fails even when it should
/// panic.
///
/// # Outcomes
///
/// The generated test panics if a parameter names no registered fixture (the test _errors_
/// and its body never runs) or if the body panics (the test _fails_).
///
/// [`TestCase`]: https://docs.rs/arrange/latest/arrange/invoker/struct.TestCase.html
#[proc_macro_attribute]
pub fn arrange(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let mut test = parse_macro_input!(input as ItemFn);
    let mut info = parse_macro_input!(args as ArrangeInfo);

    let extend_result = info.extend_with_function_attrs(&mut test);

    let mut errors = error::arrange(&test, &info);

    if let Err(attrs_errors) = extend_result {
        attrs_errors.to_tokens(&mut errors);
    }

    if errors.is_empty() {
        render::arrange(test, info)
    } else {
        errors
    }
    .into()
}
