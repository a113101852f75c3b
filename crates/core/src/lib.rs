pub mod count_file;
pub mod error;
pub mod gate;
pub mod inputs;
pub mod parsers;
pub mod severity;
