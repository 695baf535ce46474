//! Synchronous generator with generating and motoring modes.

use pl_core::eng::in_mw;
use pl_core::units::{Power, ReactivePower, Voltage, kv, mvar, mw};
use pl_core::{Bound, ModelError, ModelResult, Real, check};
use tracing::debug;

/// Operating mode derived from the sign of the active power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    Generating,
    Idle,
    Motoring,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    u_nom: Voltage,
    /// Active power delivered to the grid (negative when motoring)
    p: Power,
    /// Ratio Q/P used while generating
    tg_phi: Real,
    q: ReactivePower,
}

impl Generator {
    /// Create a generator delivering `p` MW at rated voltage `u_nom` kV.
    pub fn new(u_nom: f64, p: f64, tg_phi: f64) -> ModelResult<Self> {
        let u_nom = check(u_nom, "generator rated voltage", Bound::Positive)?;
        let p = check(p, "generator active power", Bound::NonNegative)?;
        let tg_phi = check(tg_phi, "generator power factor tangent", Bound::Any)?;

        Ok(Self {
            u_nom: kv(u_nom),
            p: mw(p),
            tg_phi,
            q: mvar(p * tg_phi),
        })
    }

    pub fn u_nom(&self) -> Voltage {
        self.u_nom
    }

    pub fn p(&self) -> Power {
        self.p
    }

    pub fn q(&self) -> ReactivePower {
        self.q
    }

    pub fn tg_phi(&self) -> Real {
        self.tg_phi
    }

    pub fn mode(&self) -> OperatingMode {
        let p = in_mw(self.p);
        if p > 0.0 {
            OperatingMode::Generating
        } else if p < 0.0 {
            OperatingMode::Motoring
        } else {
            OperatingMode::Idle
        }
    }

    /// Change the delivered active power; reactive power follows through `tg_phi`.
    pub fn generation_changing(&mut self, p_new: f64) -> ModelResult<()> {
        let p_new = check(p_new, "new generator active power", Bound::NonNegative)?;
        self.p = mw(p_new);
        self.q = mvar(p_new * self.tg_phi);
        debug!(p_mw = p_new, "generation changed");
        Ok(())
    }

    /// Switch to motoring: `p_motor` MW consumed (<= 0), `q_motor` Mvar.
    ///
    /// Reactive power is taken as given, `tg_phi` is left as it was.
    pub fn motor_mode_switching(&mut self, p_motor: f64, q_motor: f64) -> ModelResult<()> {
        let p_motor = check(p_motor, "motor active power", Bound::NonPositive)?;
        let q_motor = check(q_motor, "motor reactive power", Bound::Any)?;
        if q_motor.abs() > p_motor.abs() {
            return Err(ModelError::InvalidValue {
                what: "motor reactive power",
                reason: "magnitude must not exceed the active power magnitude",
            });
        }

        self.p = mw(p_motor);
        self.q = mvar(q_motor);
        debug!(p_mw = p_motor, q_mvar = q_motor, "switched to motor mode");
        Ok(())
    }
}
