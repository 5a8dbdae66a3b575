//! tl-core: shared foundation for towerline.
//!
//! Contains:
//! - units (uom SI types, constructors, electromagnetic constants)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TlError, TlResult};
pub use numeric::*;
pub use units::*;
