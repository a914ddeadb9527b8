/// Define `Resolver` trait that gives the name of the fixture to inject in each argument, and
/// implement it on some hashmaps and tuple composition.
///
use std::borrow::Cow;
use std::collections::HashMap;

use syn::{Ident, Pat};

use crate::parse::FixtureRef;
use crate::refident::MaybeIdent;

pub(crate) mod fixtures {
    use super::*;

    /// Arguments renamed by `#[from(...)]`.
    pub(crate) fn get<'a>(fixtures: impl Iterator<Item = &'a FixtureRef>) -> impl Resolver + 'a {
        fixtures
            .map(|f| (f.arg.clone(), &f.name))
            .collect::<HashMap<_, &'a Ident>>()
    }

}

/// A trait that `resolve` the given argument pattern to the name of the fixture to inject.
pub(crate) trait Resolver {
    fn resolve<'s>(&'s self, arg: &'s Pat) -> Option<Cow<'s, Ident>>;
}

impl<'a> Resolver for HashMap<Pat, &'a Ident> {
    fn resolve<'s>(&'s self, arg: &'s Pat) -> Option<Cow<'s, Ident>> {
        self.get(arg).map(|&name| Cow::Borrowed(name))
    }
}

/// Every argument with a simple binding asks for the fixture with its own name.
pub(crate) struct ByName;

impl Resolver for ByName {
    fn resolve<'s>(&'s self, arg: &'s Pat) -> Option<Cow<'s, Ident>> {
        arg.maybe_ident().map(Cow::Borrowed)
    }
}

impl<R1: Resolver, R2: Resolver> Resolver for (R1, R2) {
    fn resolve<'s>(&'s self, arg: &'s Pat) -> Option<Cow<'s, Ident>> {
        self.0.resolve(arg).or_else(|| self.1.resolve(arg))
    }
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve<'s>(&'s self, arg: &'s Pat) -> Option<Cow<'s, Ident>> {
        (*self).resolve(arg)
    }
}
