//! Core definitions (error type, result alias and identity hashing), relied upon by all
//! tenure-* crates.

pub mod error;
pub mod hash;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
