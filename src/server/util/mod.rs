pub mod form;
pub mod json;
pub mod mention;
pub mod parse;
