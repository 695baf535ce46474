//! Two-winding transformer with side referral and an on-load tap changer.

use pl_core::eng::in_kv;
use pl_core::units::{Conductance, Resistance, Voltage, kv, microsiemens, ohm};
use pl_core::{Bound, ModelError, ModelResult, Real, check, ensure_finite};
use tracing::debug;

/// Winding that the transformer parameters are currently referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindingSide {
    High,
    Low,
}

/// Two-winding transformer.
///
/// Parameters are given referred to the high-voltage winding. `k_trans` starts
/// as `U_lv / U_hv` and is inverted each time the parameters are moved to the
/// other winding, so `k_trans > 1` is how the model tells that it currently sits
/// on the low-voltage side. The tap changer relies on that convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformer {
    r_trans: Resistance,
    x_trans: Resistance,
    /// Magnetising susceptance (<= 0)
    b_trans: Conductance,
    u_high_volt: Voltage,
    u_low_volt: Voltage,
    k_trans: Real,
}

impl Transformer {
    /// Create a transformer.
    ///
    /// # Arguments
    /// * `r` - active resistance referred to the HV winding, Ω (>= 0)
    /// * `x` - reactance referred to the HV winding, Ω (> 0)
    /// * `b` - susceptance to ground referred to the HV winding, µS (<= 0)
    /// * `u_hv` - rated voltage of the HV winding, kV (> 0)
    /// * `u_lv` - rated voltage of the LV winding, kV (> 0)
    pub fn new(r: f64, x: f64, b: f64, u_hv: f64, u_lv: f64) -> ModelResult<Self> {
        let r = check(r, "transformer active resistance", Bound::NonNegative)?;
        let x = check(x, "transformer reactance", Bound::Positive)?;
        let b = check(b, "transformer susceptance to ground", Bound::NonPositive)?;
        let u_hv = check(u_hv, "HV winding rated voltage", Bound::Positive)?;
        let u_lv = check(u_lv, "LV winding rated voltage", Bound::Positive)?;
        let k_trans = check(u_lv / u_hv, "transformer ratio", Bound::Positive)?;

        Ok(Self {
            r_trans: ohm(r),
            x_trans: ohm(x),
            b_trans: microsiemens(b),
            u_high_volt: kv(u_hv),
            u_low_volt: kv(u_lv),
            k_trans,
        })
    }

    pub fn r_trans(&self) -> Resistance {
        self.r_trans
    }

    pub fn x_trans(&self) -> Resistance {
        self.x_trans
    }

    pub fn b_trans(&self) -> Conductance {
        self.b_trans
    }

    pub fn u_high_volt(&self) -> Voltage {
        self.u_high_volt
    }

    pub fn u_low_volt(&self) -> Voltage {
        self.u_low_volt
    }

    /// Current turns ratio.
    pub fn k_trans(&self) -> Real {
        self.k_trans
    }

    pub fn referred_side(&self) -> WindingSide {
        if self.k_trans > 1.0 {
            WindingSide::Low
        } else {
            WindingSide::High
        }
    }

    /// Refer the parameters to the other winding through the current ratio.
    ///
    /// Impedances scale by `k²`, susceptance by `1/k²`, and the ratio is
    /// inverted. Calling this twice restores the original state.
    pub fn bring_to_low_voltage(&mut self) {
        let k2 = self.k_trans * self.k_trans;
        self.r_trans = self.r_trans * k2;
        self.x_trans = self.x_trans * k2;
        self.b_trans = self.b_trans / k2;
        self.k_trans = 1.0 / self.k_trans;
        debug!(k_trans = self.k_trans, side = ?self.referred_side(), "transformer parameters referred");
    }

    /// Move the tap changer to position `n_sol`, each step changing the voltage by
    /// `delta_u` percent.
    ///
    /// The HV winding voltage is the regulated one. The ratio keeps its current
    /// orientation, see [`Transformer::referred_side`]:
    /// - low side (`k_trans > 1`): `k = U_hv·(1 + n·Δu/100) / U_lv`
    /// - high side: `k = U_lv / (U_hv·(1 + n·Δu/100))`
    ///
    /// Fails without touching the ratio when the voltage factor is not positive or
    /// the new ratio is not a positive finite number.
    pub fn soldering_changing(&mut self, n_sol: i32, delta_u: f64) -> ModelResult<()> {
        let delta_u = check(delta_u, "voltage step per tap", Bound::NonNegative)?;
        let factor = ensure_finite(
            1.0 + f64::from(n_sol) * (delta_u / 100.0),
            "tap changer voltage factor",
        )?;
        if factor <= 0.0 {
            return Err(ModelError::InvalidValue {
                what: "tap changer position",
                reason: "regulated winding voltage must stay positive",
            });
        }

        let u_hv = in_kv(self.u_high_volt);
        let u_lv = in_kv(self.u_low_volt);
        let k = match self.referred_side() {
            WindingSide::Low => (u_hv * factor) / u_lv,
            WindingSide::High => u_lv / (u_hv * factor),
        };
        self.k_trans = check(k, "transformer ratio", Bound::Positive)?;
        debug!(n_sol, delta_u, k_trans = self.k_trans, "tap changer moved");
        Ok(())
    }
}
