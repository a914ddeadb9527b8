use std::any::{type_name, Any};

use crate::error::{InvokeError, Result};

/// A type-erased fixture value.
pub type Value = Box<dyn Any>;

/// The resolved values handed to a provider or to a test body, in the order
/// they were requested.
///
/// Every value is owned: [`take`](Arguments::take) moves it out, so a value
/// can be taken just once.
#[derive(Default)]
pub struct Arguments {
    values: Vec<(&'static str, Option<Value>)>,
}

impl Arguments {
    pub(crate) fn push(&mut self, name: &'static str, value: Value) {
        self.values.push((name, Some(value)))
    }

    /// Move out the first value still available under `name`, downcast to `T`.
    ///
    /// On a type mismatch the value stays in place and can be taken again with
    /// the right type.
    pub fn take<T: 'static>(&mut self, name: &str) -> Result<T> {
        let missing = || InvokeError::MissingArgument {
            name: name.to_owned(),
        };
        let slot = self
            .values
            .iter_mut()
            .find_map(|(n, v)| (*n == name && v.is_some()).then_some(v))
            .ok_or_else(missing)?;
        let value = slot.take().ok_or_else(missing)?;
        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => {
                *slot = Some(value);
                Err(InvokeError::TypeMismatch {
                    name: name.to_owned(),
                    expected: type_name::<T>(),
                })
            }
        }
    }

    /// Names of the values not taken yet.
    pub fn available(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values
            .iter()
            .filter(|(_, v)| v.is_some())
            .map(|(n, _)| *n)
    }

    pub fn len(&self) -> usize {
        self.available().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.available()).finish()
    }
}
