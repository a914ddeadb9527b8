use std::cell::Cell;
use std::rc::Rc;

use arrange::*;
use pretty_assertions::assert_eq;

use super::init_tracing;

#[fixture]
fn basket() -> Vec<String> {
    vec!["apple".to_owned(), "banana".to_owned()]
}

#[fixture]
fn count(basket: Vec<String>) -> usize {
    basket.len()
}

fn registry() -> Result<FixtureRegistry, RegistryError> {
    init_tracing();
    FixtureRegistry::new()
        .with(basket::NAME, basket::provider())
        .and_then(|r| r.with(count::NAME, count::provider()))
}

fn plain_registry() -> FixtureRegistry {
    let mut registry = FixtureRegistry::new();
    registry
        .register("answer", Provider::from_fn(|| 42_u8))
        .unwrap();
    registry
}

fn broken_registry() -> Result<FixtureRegistry, RegistryError> {
    registry().and_then(|r| r.with(basket::NAME, basket::provider()))
}

#[arrange]
fn inject_by_name(basket: Vec<String>, count: usize) {
    assert_eq!(count, basket.len());
}

#[arrange]
fn every_parameter_is_fresh(mut basket: Vec<String>, #[from(basket)] other: Vec<String>) {
    basket.clear();

    assert_eq!(2, other.len());
}

#[arrange(plain_registry)]
fn use_another_registry(answer: u8) {
    assert_eq!(42, answer);
}

// The tests below cannot be arranged: `mod should` runs them and checks the
// setup error they panic with.
#[arrange]
#[ignore]
fn missing_fixture(grapes: Vec<String>) {
    assert!(grapes.is_empty());
}

#[arrange]
#[ignore]
fn wrong_type(count: u32) {
    assert_eq!(2, count);
}

#[arrange(broken_registry)]
#[ignore]
fn broken(basket: Vec<String>) {
    assert!(!basket.is_empty());
}

#[arrange]
#[ignore]
#[should_panic]
fn expect_a_panic_without_grapes(grapes: Vec<String>) {
    panic!("{} grapes", grapes.len());
}

#[arrange]
#[ignore]
#[should_panic(expected = "grapes")]
fn expect_grapes_without_grapes(grapes: Vec<String>) {
    panic!("{} grapes", grapes.len());
}

#[arrange]
#[should_panic(expected = "three fruit")]
fn failing(count: usize) {
    assert_eq!(3, count, "three fruit");
}

#[arrange]
#[ignore]
fn ignored(basket: Vec<String>) {
    assert!(basket.is_empty());
}

mod should {
    use std::panic;

    use super::*;
    use pretty_assertions::assert_eq;

    fn panic_message_of(test: fn()) -> String {
        let payload = panic::catch_unwind(test).unwrap_err();
        payload
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_default()
    }

    #[test]
    fn fail_with_the_missing_fixture() {
        assert_eq!(
            "cannot arrange 'missing_fixture': cannot resolve 'grapes' requested by \
             'missing_fixture': no fixture named 'grapes'",
            panic_message_of(missing_fixture)
        );
    }

    #[test]
    fn fail_with_the_wrong_type() {
        assert_eq!(
            "cannot arrange 'wrong_type': argument 'count' is not a `u32`",
            panic_message_of(wrong_type)
        );
    }

    #[test]
    fn fail_when_the_registry_cannot_be_collected() {
        assert_eq!(
            "cannot collect fixtures for 'broken': fixture 'basket' is already registered",
            panic_message_of(broken)
        );
    }

    #[test]
    fn fail_a_should_panic_test_that_cannot_be_arranged() {
        assert!(panic_message_of(expect_a_panic_without_grapes)
            .starts_with("cannot arrange 'expect_a_panic_without_grapes'"));
        assert!(panic_message_of(expect_grapes_without_grapes)
            .starts_with("cannot arrange 'expect_grapes_without_grapes'"));
    }

    #[test]
    fn pass_a_should_panic_test_when_the_body_panics_as_expected() {
        failing();
    }

    #[test]
    fn expose_the_case() {
        let case = inject_by_name::case();

        assert_eq!("inject_by_name", case.name());
        assert_eq!(&["basket", "count"], case.parameters());
        assert_eq!(&["basket", "basket"], every_parameter_is_fresh::PARAMETERS);
    }

    #[test]
    fn fail_without_crashing() {
        let registry = registry().unwrap();

        let outcome = Invoker::new(&registry).invoke(&failing::case());

        assert!(outcome.is_failed());
    }

    #[test]
    fn run_body_only_when_arranged() {
        let registry = registry().unwrap();
        let runs = Rc::new(Cell::new(0_u32));
        let counter = runs.clone();
        let case = TestCase::new("needs_grapes", &["basket", "grapes"], move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });

        let outcome = Invoker::new(&registry).invoke(&case);

        assert!(outcome.is_errored());
        assert_eq!(0, runs.get());
    }

    #[test]
    fn run_every_case_in_a_session() {
        let registry = registry().unwrap();
        let cases = [
            inject_by_name::case(),
            failing::case(),
            missing_fixture::case(),
            every_parameter_is_fresh::case(),
        ];

        let summary = Session::new(&registry).run(&cases);

        assert_eq!(
            vec![
                "inject_by_name",
                "failing",
                "missing_fixture",
                "every_parameter_is_fresh"
            ],
            summary
                .outcomes()
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
        );
        assert_eq!((2, 1, 1), (summary.passed(), summary.failed(), summary.errored()));
        assert!(!summary.is_success());
        assert_eq!(1, summary.exit_code());
    }

    #[test]
    fn stop_at_the_first_failure_when_fail_fast() {
        let registry = registry().unwrap();
        let cases = [
            inject_by_name::case(),
            failing::case(),
            every_parameter_is_fresh::case(),
        ];
        let config = SessionConfig {
            fail_fast: true,
            ..Default::default()
        };

        let summary = Session::with_config(&registry, config).run(&cases);

        assert_eq!(2, summary.total());
        assert!(summary.outcome("every_parameter_is_fresh").is_none());
    }

    #[test]
    fn run_only_the_filtered_cases() {
        let registry = registry().unwrap();
        let cases = [
            inject_by_name::case(),
            failing::case(),
            every_parameter_is_fresh::case(),
        ];
        let config = SessionConfig {
            filter: Some("inject".to_owned()),
            ..Default::default()
        };

        let summary = Session::with_config(&registry, config).run(&cases);

        assert_eq!(1, summary.total());
        assert!(summary.is_success());
        assert_eq!(0, summary.exit_code());
    }
}
