//! pl-components: lumped models of power-system elements.
//!
//! Provides models for:
//! - Transmission lines built from per-kilometre parameters
//! - Two-winding transformers with side referral and an on-load tap changer
//! - Synchronous generators with generating and motoring modes
//!
//! Every constructor and mutator validates all arguments before touching any
//! field, so a failed call leaves the model unchanged.
//!
//! # Example
//!
//! ```
//! use pl_components::{ParallelCircuits, TransmissionLine};
//! use pl_core::eng::in_ohm;
//!
//! let mut line = TransmissionLine::new(0.01, 0.03, 3.25, 100.0).unwrap();
//! line.add_parallel_lines(2).unwrap();
//! line.line_compensation(-1.0).unwrap();
//!
//! assert!((in_ohm(line.x_line()) - 0.5).abs() < 1e-9);
//! ```

pub mod generator;
pub mod line;
pub mod traits;
pub mod transformer;

// Re-exports
pub use generator::{Generator, OperatingMode};
pub use line::TransmissionLine;
pub use traits::ParallelCircuits;
pub use transformer::{Transformer, WindingSide};
