//! Project schema definitions.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub lines: Vec<LineDef>,
    #[serde(default)]
    pub transformers: Vec<TransformerDef>,
    #[serde(default)]
    pub generators: Vec<GeneratorDef>,
    #[serde(default)]
    pub network_lines: Vec<NetworkLineDef>,
    #[serde(default)]
    pub books: Vec<BookDef>,
}

/// Line given by per-kilometre parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineDef {
    pub id: String,
    pub r_ohm_per_km: f64,
    pub x_ohm_per_km: f64,
    pub b_us_per_km: f64,
    pub length_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_circuits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compensation_ohm: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransformerDef {
    pub id: String,
    pub r_ohm: f64,
    pub x_ohm: f64,
    pub b_us: f64,
    pub u_hv_kv: f64,
    pub u_lv_kv: f64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub refer_to_low_side: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap: Option<TapDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TapDef {
    pub position: i32,
    pub step_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorDef {
    pub id: String,
    pub u_nom_kv: f64,
    pub p_mw: f64,
    pub tg_phi: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor: Option<MotorDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MotorDef {
    pub p_mw: f64,
    pub q_mvar: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkLineDef {
    pub disp_name: String,
    pub length_km: f64,
    pub u_nom_kv: f64,
    #[serde(default)]
    pub kind: NetworkLineKindDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_circuits: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NetworkLineKindDef {
    #[default]
    Base,
    Overhead {
        z: ComplexDef,
        y: ComplexDef,
    },
    Cable {
        z: ComplexDef,
        y: ComplexDef,
        insulator: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ComplexDef {
    pub re: f64,
    pub im: f64,
}

impl From<ComplexDef> for Complex64 {
    fn from(c: ComplexDef) -> Self {
        Complex64::new(c.re, c.im)
    }
}

impl From<Complex64> for ComplexDef {
    fn from(c: Complex64) -> Self {
        Self { re: c.re, im: c.im }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookDef {
    pub id: u32,
    pub name: String,
    pub pages: u32,
}

fn is_false(v: &bool) -> bool {
    !*v
}
