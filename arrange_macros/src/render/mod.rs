pub(crate) mod arrange;
pub(crate) mod crate_resolver;
pub(crate) mod fixture;
pub(crate) mod inject;

pub(crate) use self::arrange::render as arrange;
pub(crate) use self::fixture::render as fixture;
