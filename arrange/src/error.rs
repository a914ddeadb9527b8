//! Errors raised while collecting fixtures and while arranging a test.
use thiserror::Error;

/// Errors raised by the [`FixtureRegistry`](crate::FixtureRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A provider is already registered under this name.
    #[error("fixture '{name}' is already registered")]
    DuplicateName { name: String },
    /// No provider is registered under this name.
    #[error("no fixture named '{name}'")]
    NotFound { name: String },
}

impl RegistryError {
    pub(crate) fn duplicate_name(name: &str) -> Self {
        Self::DuplicateName {
            name: name.to_owned(),
        }
    }

    pub(crate) fn not_found(name: &str) -> Self {
        Self::NotFound {
            name: name.to_owned(),
        }
    }
}

/// Setup errors: the test body is never executed when one of these is raised
/// while arranging its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// `parameter` is not a registered fixture.
    #[error("cannot resolve '{parameter}' requested by '{requested_by}': {source}")]
    Unresolvable {
        parameter: String,
        requested_by: String,
        #[source]
        source: RegistryError,
    },
    /// The fixtures in `chain` depend on each other in a loop; the first and
    /// last entries are the same fixture.
    #[error("fixture dependency cycle: {}", .chain.join(" -> "))]
    Cycle { chain: Vec<String> },
    /// The value provided for `name` is not of the requested type.
    #[error("argument '{name}' is not a `{expected}`")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },
    /// `name` was never resolved for this call or was already taken.
    #[error("argument '{name}' is not available")]
    MissingArgument { name: String },
    /// The provider of `name` panicked.
    #[error("fixture '{name}' panicked: {message}")]
    ProviderPanicked { name: String, message: String },
}

pub type Result<T, E = InvokeError> = std::result::Result<T, E>;
