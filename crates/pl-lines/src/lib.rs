//! pl-lines: dispatch-level transmission line records.
//!
//! Provides:
//! - `NetworkLine`, a named line with rated voltage and conditional length
//! - `LineKind`, the construction variants (plain, overhead, cable)
//! - Backbone classification by rated voltage
//!
//! # Example
//!
//! ```
//! use num_complex::Complex64;
//! use pl_components::ParallelCircuits;
//! use pl_lines::NetworkLine;
//!
//! let mut line = NetworkLine::overhead(
//!     "ВЛ-330 Кондопога-Петрозаводск",
//!     76.0,
//!     330.0,
//!     Complex64::new(1.0, 1.0),
//!     Complex64::new(0.5, 0.5),
//! )
//! .unwrap();
//!
//! assert!(line.is_backbone_line());
//! line.add_parallel_lines(2).unwrap();
//! assert_eq!(line.z(), Some(Complex64::new(0.5, 0.5)));
//! assert_eq!(line.y(), Some(Complex64::new(1.0, 1.0)));
//! ```

pub mod kind;
pub mod line;

// Re-exports for ergonomics
pub use kind::{LineKind, LineParams};
pub use line::{Classification, NetworkLine};
