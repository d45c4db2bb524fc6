//! Reusable operations shared by commands
//!
//! The file-system side of generation: reading the API description and
//! writing the generated files.

pub mod load;
pub mod write;
