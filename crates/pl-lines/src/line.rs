//! Named transmission line as it appears in dispatch records.

use core::fmt;

use num_complex::Complex64;
use pl_components::ParallelCircuits;
use pl_core::constants::backbone_voltage;
use pl_core::units::{Length, Voltage, km, kv};
use pl_core::{Bound, ModelResult, check, check_count};
use tracing::{debug, info};

use crate::kind::{LineKind, LineParams};

/// Transmission line identified by its dispatch name.
///
/// `conditional_length` starts equal to the real length and is what technical
/// calculations use once parallel circuits are folded in. The dispatch name and
/// the construction kind are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkLine {
    disp_name: String,
    length: Length,
    u_nom: Voltage,
    conditional_length: Length,
    kind: LineKind,
}

impl NetworkLine {
    /// Create a line with dispatch data only.
    ///
    /// # Arguments
    /// * `disp_name` - dispatch name, unique and unchangeable
    /// * `length` - real length, km (> 0)
    /// * `u_nom` - rated voltage, kV (> 0)
    pub fn new(disp_name: impl Into<String>, length: f64, u_nom: f64) -> ModelResult<Self> {
        Self::with_kind(disp_name, length, u_nom, || Ok(LineKind::Base))
    }

    /// Create an overhead line with impedance `z` (Ω) and admittance `y` (µS).
    pub fn overhead(
        disp_name: impl Into<String>,
        length: f64,
        u_nom: f64,
        z: Complex64,
        y: Complex64,
    ) -> ModelResult<Self> {
        Self::with_kind(disp_name, length, u_nom, || {
            Ok(LineKind::Overhead(LineParams::new(z, y)?))
        })
    }

    /// Create a cable line; `insulator` names the insulation material.
    pub fn cable(
        disp_name: impl Into<String>,
        length: f64,
        u_nom: f64,
        z: Complex64,
        y: Complex64,
        insulator: impl Into<String>,
    ) -> ModelResult<Self> {
        Self::with_kind(disp_name, length, u_nom, || {
            Ok(LineKind::Cable {
                params: LineParams::new(z, y)?,
                insulator: insulator.into(),
            })
        })
    }

    // Dispatch data is validated before the kind-specific parameters.
    fn with_kind(
        disp_name: impl Into<String>,
        length: f64,
        u_nom: f64,
        kind: impl FnOnce() -> ModelResult<LineKind>,
    ) -> ModelResult<Self> {
        let length = check(length, "line length", Bound::Positive)?;
        let u_nom = check(u_nom, "line rated voltage", Bound::Positive)?;
        let kind = kind()?;

        Ok(Self {
            disp_name: disp_name.into(),
            length: km(length),
            u_nom: kv(u_nom),
            conditional_length: km(length),
            kind,
        })
    }

    pub fn disp_name(&self) -> &str {
        &self.disp_name
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn u_nom(&self) -> Voltage {
        self.u_nom
    }

    pub fn conditional_length(&self) -> Length {
        self.conditional_length
    }

    pub fn kind(&self) -> &LineKind {
        &self.kind
    }

    pub fn z(&self) -> Option<Complex64> {
        self.kind.params().map(LineParams::z)
    }

    pub fn y(&self) -> Option<Complex64> {
        self.kind.params().map(LineParams::y)
    }

    pub fn insulator(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Cable { insulator, .. } => Some(insulator.as_str()),
            _ => None,
        }
    }

    /// Classify the line by its rated voltage without logging.
    pub fn classification(&self) -> Classification<'_> {
        Classification {
            disp_name: &self.disp_name,
            backbone: self.u_nom >= backbone_voltage(),
        }
    }

    /// Whether the line belongs to the backbone grid (rated voltage >= 330 kV).
    ///
    /// The verdict is also reported as an `info` event.
    pub fn is_backbone_line(&self) -> bool {
        let classification = self.classification();
        info!("{classification}");
        classification.backbone
    }
}

impl ParallelCircuits for NetworkLine {
    /// Every kind shortens the conditional length; lines with known parameters
    /// also divide `z` and multiply `y` by the count.
    fn add_parallel_lines(&mut self, num_of_lines: u32) -> ModelResult<()> {
        let n = f64::from(check_count(num_of_lines, "number of parallel circuits")?);
        self.conditional_length = self.conditional_length / n;
        match &mut self.kind {
            LineKind::Base => {}
            LineKind::Overhead(params) | LineKind::Cable { params, .. } => {
                *params = params.parallel(n);
            }
        }
        debug!(line = %self.disp_name, num_of_lines, "parallel circuits combined");
        Ok(())
    }
}

impl fmt::Display for NetworkLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.disp_name)
    }
}

/// Backbone verdict for one line, printable as a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub disp_name: &'a str,
    pub backbone: bool,
}

impl fmt::Display for Classification<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.backbone {
            write!(f, "Line {:?} is a backbone line", self.disp_name)
        } else {
            write!(f, "Line {:?} is not a backbone line", self.disp_name)
        }
    }
}
