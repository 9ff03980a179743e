pub(crate) mod frontier;
pub(crate) mod magnetic;
pub(crate) mod peripheral;
pub(crate) mod random;
pub(crate) mod strategy;
