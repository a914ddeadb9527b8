use arrange::*;
use pretty_assertions::assert_eq;

use super::init_tracing;

#[fixture]
fn twenty_one() -> i32 {
    21
}

#[fixture]
fn two() -> i32 {
    2
}

#[fixture]
fn injected(twenty_one: i32, two: i32) -> i32 {
    twenty_one * two
}

#[fixture]
fn renamed(#[from(twenty_one)] base: i32, #[from(two)] mut factor: i32) -> i32 {
    factor += 1;
    base * factor
}

#[fixture]
fn pair() -> (i32, &'static str) {
    (42, "answer")
}

#[fixture]
fn described(#[from(pair)] (value, name): (i32, &'static str)) -> String {
    format!("{name} = {value}")
}

#[fixture]
fn exploding() -> i32 {
    panic!("no fruit today")
}

#[fixture]
fn needs_exploding(exploding: i32) -> i32 {
    exploding
}

#[fixture]
fn ping(pong: u32) -> u32 {
    pong
}

#[fixture]
fn pong(ping: u32) -> u32 {
    ping
}

mod other_module {
    use arrange::fixture;

    #[fixture]
    pub fn shared() -> Vec<&'static str> {
        vec!["apple", "banana"]
    }
}

fn registry() -> Result<FixtureRegistry, RegistryError> {
    let mut registry = FixtureRegistry::new();
    twenty_one::register(&mut registry)?;
    two::register(&mut registry)?;
    injected::register(&mut registry)?;
    renamed::register(&mut registry)?;
    pair::register(&mut registry)?;
    described::register(&mut registry)?;
    exploding::register(&mut registry)?;
    needs_exploding::register(&mut registry)?;
    ping::register(&mut registry)?;
    pong::register(&mut registry)?;
    other_module::shared::register(&mut registry)?;
    Ok(registry)
}

mod should {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve<T: 'static>(name: &'static str) -> Result<T, InvokeError> {
        init_tracing();
        let registry = registry().unwrap();
        Invoker::new(&registry).resolve(name)
    }

    #[test]
    fn expose_name_and_dependencies() {
        assert_eq!("injected", injected::NAME);
        assert_eq!(&["twenty_one", "two"], injected::DEPENDENCIES);
        assert_eq!(&["twenty_one", "two"], renamed::DEPENDENCIES);
        assert!(twenty_one::DEPENDENCIES.is_empty());
    }

    #[test]
    fn call_the_fixture_directly_with_get() {
        assert_eq!(21, twenty_one::get());
        assert_eq!(12, injected::get(3, 4));
        assert_eq!(15, renamed::get(5, 2));
    }

    #[test]
    fn resolve_dependencies_before_the_fixture() {
        assert_eq!(42, resolve::<i32>("injected").unwrap());
    }

    #[test]
    fn inject_renamed_arguments() {
        assert_eq!(63, resolve::<i32>("renamed").unwrap());
    }

    #[test]
    fn destruct_a_renamed_fixture() {
        assert_eq!("answer = 42", resolve::<String>("described").unwrap());
    }

    #[test]
    fn be_accessible_from_other_module() {
        assert_eq!(vec!["apple", "banana"], other_module::shared::get());
        assert_eq!(
            vec!["apple", "banana"],
            resolve::<Vec<&'static str>>("shared").unwrap()
        );
    }

    #[test]
    fn report_a_panicking_provider_as_error() {
        assert_eq!(
            InvokeError::ProviderPanicked {
                name: "exploding".to_owned(),
                message: "no fruit today".to_owned(),
            },
            resolve::<i32>("needs_exploding").unwrap_err()
        );
    }

    #[test]
    fn detect_cycles() {
        assert_eq!(
            InvokeError::Cycle {
                chain: vec!["ping".to_owned(), "pong".to_owned(), "ping".to_owned()]
            },
            resolve::<u32>("ping").unwrap_err()
        );
    }

    #[test]
    fn report_the_wrong_type() {
        assert_eq!(
            InvokeError::TypeMismatch {
                name: "twenty_one".to_owned(),
                expected: "u64",
            },
            resolve::<u64>("twenty_one").unwrap_err()
        );
    }

    #[test]
    fn refuse_to_register_the_same_fixture_twice() {
        let mut registry = registry().unwrap();

        assert_eq!(
            Err(RegistryError::DuplicateName {
                name: "two".to_owned()
            }),
            two::register(&mut registry)
        );
    }

    #[test]
    fn replace_fixtures_when_configured() {
        init_tracing();
        let mut registry = FixtureRegistry::with_config(RegistryConfig {
            duplicates: DuplicatePolicy::Replace,
        });
        twenty_one::register(&mut registry).unwrap();
        two::register(&mut registry).unwrap();
        injected::register(&mut registry).unwrap();

        registry
            .register(two::NAME, Provider::from_fn(|| 3_i32))
            .unwrap();

        assert_eq!(
            63,
            Invoker::new(&registry).resolve::<i32>("injected").unwrap()
        );
    }
}
