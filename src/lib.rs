//! Error taxonomy, an append-only array of shared handles, and a checked
//! square root, plus the console demonstration that ties them together.

pub mod config;
pub mod demo;
pub mod describe;
pub mod errors;
pub mod numeric;
pub mod pointer_array;

pub use describe::Describe;
pub use errors::{ConversionError, ErrorKind, ProgramError};
pub use numeric::{root, DomainError};
pub use pointer_array::{ArrayError, PointerArray};
