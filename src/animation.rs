pub(crate) mod keyframes;
pub(crate) mod sequence;
pub(crate) mod spec;
