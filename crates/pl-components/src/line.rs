//! Transmission line assembled from per-kilometre parameters.

use pl_core::units::{Conductance, Length, Resistance, km, microsiemens, ohm};
use pl_core::{Bound, ModelResult, check, check_count, ensure_finite};
use tracing::debug;

use crate::traits::ParallelCircuits;

/// Transmission line with lumped parameters for its full length.
///
/// Per-kilometre parameters are scaled by the length once, at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransmissionLine {
    length: Length,
    r_line: Resistance,
    x_line: Resistance,
    b_line: Conductance,
}

impl TransmissionLine {
    /// Create a line.
    ///
    /// # Arguments
    /// * `r` - active resistance, Ω/km (>= 0)
    /// * `x` - reactance, Ω/km (> 0)
    /// * `b` - shunt susceptance to ground, µS/km (>= 0)
    /// * `length` - line length, km (> 0)
    pub fn new(r: f64, x: f64, b: f64, length: f64) -> ModelResult<Self> {
        let length = check(length, "line length", Bound::Positive)?;
        let r = check(r, "line active resistance", Bound::NonNegative)?;
        let x = check(x, "line reactance", Bound::Positive)?;
        let b = check(b, "line susceptance to ground", Bound::NonNegative)?;
        let r_line = ensure_finite(r * length, "line active resistance")?;
        let x_line = ensure_finite(x * length, "line reactance")?;
        let b_line = ensure_finite(b * length, "line susceptance to ground")?;

        Ok(Self {
            length: km(length),
            r_line: ohm(r_line),
            x_line: ohm(x_line),
            b_line: microsiemens(b_line),
        })
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn r_line(&self) -> Resistance {
        self.r_line
    }

    pub fn x_line(&self) -> Resistance {
        self.x_line
    }

    pub fn b_line(&self) -> Conductance {
        self.b_line
    }

    /// Account for a series compensation device.
    ///
    /// `x_comp` is the capacitive reactance of the device in Ω and must be <= 0.
    /// The resulting line reactance is not re-validated: over-compensation is a
    /// legitimate (if unusual) operating point.
    pub fn line_compensation(&mut self, x_comp: f64) -> ModelResult<()> {
        let x_comp = check(x_comp, "series compensation reactance", Bound::NonPositive)?;
        self.x_line = self.x_line + ohm(x_comp);
        debug!(x_comp, "series compensation applied");
        Ok(())
    }
}

impl ParallelCircuits for TransmissionLine {
    fn add_parallel_lines(&mut self, num_of_lines: u32) -> ModelResult<()> {
        let n = f64::from(check_count(num_of_lines, "number of parallel circuits")?);
        self.r_line = self.r_line / n;
        self.x_line = self.x_line / n;
        self.b_line = self.b_line * n;
        debug!(num_of_lines, "parallel circuits combined");
        Ok(())
    }
}
