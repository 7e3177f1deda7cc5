pub(crate) mod common;

mod test_classifier;
