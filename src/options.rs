pub(crate) mod builder;
pub(crate) mod token;
pub(crate) mod value;
