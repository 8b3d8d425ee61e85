pub mod analyze;
pub mod migrate;
pub mod test_gen;
