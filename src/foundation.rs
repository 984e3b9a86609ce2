pub(crate) mod css;
pub(crate) mod error;
pub(crate) mod hash;
