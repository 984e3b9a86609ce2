pub(crate) mod injector;
pub(crate) mod rule;
pub(crate) mod surface;
