/// Provide `MaybeIdent`, `MaybePat` and `MaybePatType` traits: shortcuts to reach the ident,
/// the pattern and the typed pattern of function arguments.
use proc_macro2::Ident;
use syn::{FnArg, Pat, PatType};

pub trait MaybeIdent {
    /// Return the reference to ident if any
    fn maybe_ident(&self) -> Option<&Ident>;
}

impl MaybeIdent for Pat {
    fn maybe_ident(&self) -> Option<&Ident> {
        match self {
            Pat::Ident(ident) if ident.subpat.is_none() => Some(&ident.ident),
            _ => None,
        }
    }
}

impl MaybeIdent for PatType {
    fn maybe_ident(&self) -> Option<&Ident> {
        self.pat.maybe_ident()
    }
}

impl MaybeIdent for FnArg {
    fn maybe_ident(&self) -> Option<&Ident> {
        self.maybe_pat_type().and_then(MaybeIdent::maybe_ident)
    }
}

pub trait MaybePat {
    fn maybe_pat(&self) -> Option<&Pat>;
}

impl MaybePat for FnArg {
    fn maybe_pat(&self) -> Option<&Pat> {
        self.maybe_pat_type().map(|pt| pt.pat.as_ref())
    }
}

pub trait MaybePatType {
    fn maybe_pat_type(&self) -> Option<&PatType>;
}

impl MaybePatType for FnArg {
    fn maybe_pat_type(&self) -> Option<&PatType> {
        match self {
            FnArg::Typed(pt) => Some(pt),
            FnArg::Receiver(_) => None,
        }
    }
}
