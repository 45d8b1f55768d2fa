//! px-core: numeric foundation for physix.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::{PxError, PxResult};
pub use numeric::*;
