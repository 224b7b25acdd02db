pub mod action_reader;
pub mod outcome_writer;
pub mod product_reader;
