pub(crate) mod allocation;
pub(crate) mod word;
pub(crate) mod word_vector;
