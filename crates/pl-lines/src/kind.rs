//! Construction variants of a network line.

use num_complex::Complex64;
use pl_core::{ModelResult, check_complex};

/// Series impedance and shunt admittance of the whole line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParams {
    /// Complex impedance, Ω
    z: Complex64,
    /// Complex admittance to ground, µS
    y: Complex64,
}

impl LineParams {
    /// Validate and bundle impedance and admittance.
    ///
    /// Both need a non-negative real part and a positive imaginary part.
    pub fn new(z: Complex64, y: Complex64) -> ModelResult<Self> {
        let z = check_complex(
            z,
            "real part of line impedance",
            "imaginary part of line impedance",
        )?;
        let y = check_complex(
            y,
            "real part of line admittance",
            "imaginary part of line admittance",
        )?;
        Ok(Self { z, y })
    }

    pub fn z(&self) -> Complex64 {
        self.z
    }

    pub fn y(&self) -> Complex64 {
        self.y
    }

    /// Equivalent of `n` identical circuits in parallel.
    pub(crate) fn parallel(self, n: f64) -> Self {
        Self {
            z: self.z / n,
            y: self.y * n,
        }
    }
}

/// What the line is built as.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Only the dispatch data is known.
    Base,
    Overhead(LineParams),
    Cable {
        params: LineParams,
        /// Insulation material, fixed at design time
        insulator: String,
    },
}

impl LineKind {
    pub fn params(&self) -> Option<&LineParams> {
        match self {
            LineKind::Base => None,
            LineKind::Overhead(params) | LineKind::Cable { params, .. } => Some(params),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LineKind::Base => "Transmission line",
            LineKind::Overhead(_) => "Overhead line",
            LineKind::Cable { .. } => "Cable line",
        }
    }
}
