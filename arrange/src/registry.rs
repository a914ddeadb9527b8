//! Fixture providers and the registry that maps fixture names to them.
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::arguments::{Arguments, Value};
use crate::error::{RegistryError, Result};

type Make = dyn Fn(&mut Arguments) -> Result<Value>;

/// Build a fixture value. A provider declares the names of the fixtures it
/// depends on; the [`Invoker`](crate::Invoker) resolves them and hands them to
/// the provider as [`Arguments`].
///
/// Each call builds a new value: nothing is cached between calls.
pub struct Provider {
    dependencies: Vec<&'static str>,
    make: Box<Make>,
}

impl Provider {
    pub fn new<T, F>(dependencies: &[&'static str], make: F) -> Self
    where
        T: 'static,
        F: Fn(&mut Arguments) -> Result<T> + 'static,
    {
        Self {
            dependencies: dependencies.to_vec(),
            make: Box::new(move |arguments| make(arguments).map(|v| Box::new(v) as Value)),
        }
    }

    /// A provider without dependencies.
    pub fn from_fn<T, F>(make: F) -> Self
    where
        T: 'static,
        F: Fn() -> T + 'static,
    {
        Self::new(&[], move |_| Ok(make()))
    }

    pub fn dependencies(&self) -> &[&'static str] {
        &self.dependencies
    }

    pub(crate) fn provide(&self, arguments: &mut Arguments) -> Result<Value> {
        (self.make)(arguments)
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

/// What [`FixtureRegistry::register`] does with a name that is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail with [`RegistryError::DuplicateName`] and keep the first provider.
    #[default]
    Reject,
    /// Replace the registered provider with the new one.
    Replace,
}

#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    pub duplicates: DuplicatePolicy,
}

/// Fixture providers by name.
///
/// The registry is filled before running tests and is only read while
/// arranging them.
#[derive(Debug, Default)]
pub struct FixtureRegistry {
    providers: HashMap<&'static str, Provider>,
    config: RegistryConfig,
}

impl FixtureRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Store `provider` under `name`. What happens when `name` is already
    /// registered depends on [`RegistryConfig::duplicates`].
    pub fn register(
        &mut self,
        name: &'static str,
        provider: Provider,
    ) -> std::result::Result<(), RegistryError> {
        match (self.providers.contains_key(name), self.config.duplicates) {
            (true, DuplicatePolicy::Reject) => return Err(RegistryError::duplicate_name(name)),
            (true, DuplicatePolicy::Replace) => warn!(fixture = name, "replace fixture provider"),
            (false, _) => debug!(fixture = name, "register fixture provider"),
        }
        self.providers.insert(name, provider);
        Ok(())
    }

    /// Chained version of [`register`](FixtureRegistry::register).
    pub fn with(
        mut self,
        name: &'static str,
        provider: Provider,
    ) -> std::result::Result<Self, RegistryError> {
        self.register(name, provider)?;
        Ok(self)
    }

    pub fn resolve(&self, name: &str) -> std::result::Result<&Provider, RegistryError> {
        self.providers
            .get(name)
            .ok_or_else(|| RegistryError::not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = self.providers.keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Anything a registry-building function can return.
pub trait IntoRegistry {
    fn into_registry(self) -> std::result::Result<FixtureRegistry, RegistryError>;
}

impl IntoRegistry for FixtureRegistry {
    fn into_registry(self) -> std::result::Result<FixtureRegistry, RegistryError> {
        Ok(self)
    }
}

impl IntoRegistry for std::result::Result<FixtureRegistry, RegistryError> {
    fn into_registry(self) -> std::result::Result<FixtureRegistry, RegistryError> {
        self
    }
}
