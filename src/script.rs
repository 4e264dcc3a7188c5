pub(crate) mod literal;
pub(crate) mod pipeline;
pub(crate) mod rewrite;
pub(crate) mod serialize;
