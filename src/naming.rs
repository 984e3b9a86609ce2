pub(crate) mod shorthand;
pub(crate) mod token;
