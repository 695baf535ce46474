//! Validated-field constructors shared by every model.
//!
//! Each model field is declared with a [`Bound`] and run through [`check`] before
//! any assignment, so constructors and mutators are all-or-nothing.

use core::fmt;

use num_complex::Complex64;

use crate::error::{ModelError, ModelResult};
use crate::numeric::{Real, ensure_finite};

/// Admissible range of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    NonNegative,
    /// Zero or less.
    NonPositive,
    /// Any finite value.
    Any,
}

impl Bound {
    pub fn admits(self, v: Real) -> bool {
        match self {
            Bound::Positive => v > 0.0,
            Bound::NonNegative => v >= 0.0,
            Bound::NonPositive => v <= 0.0,
            Bound::Any => true,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Positive => write!(f, "> 0"),
            Bound::NonNegative => write!(f, ">= 0"),
            Bound::NonPositive => write!(f, "<= 0"),
            Bound::Any => write!(f, "finite"),
        }
    }
}

/// Check a scalar argument: finite first (type kind), then the bound (value kind).
pub fn check(value: Real, what: &'static str, bound: Bound) -> ModelResult<Real> {
    let value = ensure_finite(value, what)?;
    if bound.admits(value) {
        Ok(value)
    } else {
        Err(ModelError::OutOfRange { what, value, bound })
    }
}

/// Check a complex impedance or admittance: real part >= 0, imaginary part > 0.
pub fn check_complex(
    value: Complex64,
    re_what: &'static str,
    im_what: &'static str,
) -> ModelResult<Complex64> {
    let re = check(value.re, re_what, Bound::NonNegative)?;
    let im = check(value.im, im_what, Bound::Positive)?;
    Ok(Complex64::new(re, im))
}

/// Check a count of items (parallel circuits and the like): must be > 0.
pub fn check_count(n: u32, what: &'static str) -> ModelResult<u32> {
    if n == 0 {
        return Err(ModelError::OutOfRange {
            what,
            value: 0.0,
            bound: Bound::Positive,
        });
    }
    Ok(n)
}
