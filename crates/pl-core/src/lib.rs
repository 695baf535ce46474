//! pl-core: shared foundation for powerlab.
//!
//! Contains:
//! - units (uom SI types + engineering-unit constructors)
//! - numeric (Real + tolerances + float helpers)
//! - validate (bounds and validated-field constructors)
//! - error (type-kind / value-kind model errors)

pub mod error;
pub mod numeric;
pub mod units;
pub mod validate;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ErrorKind, ModelError, ModelResult};
pub use numeric::*;
pub use units::*;
pub use validate::{Bound, check, check_complex, check_count};
