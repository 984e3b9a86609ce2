pub(crate) mod extractor;
pub(crate) mod props;
pub(crate) mod shadow;
