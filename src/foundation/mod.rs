pub(crate) mod collision;
pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
