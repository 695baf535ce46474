// pl-core/src/units.rs

use uom::si::f64::{
    ElectricPotential as UomElectricPotential, ElectricalConductance as UomElectricalConductance,
    ElectricalResistance as UomElectricalResistance, Length as UomLength, Power as UomPower,
};

// Public canonical unit types (SI, f64)
pub type Conductance = UomElectricalConductance;
pub type Length = UomLength;
pub type Power = UomPower;
pub type Resistance = UomElectricalResistance;
pub type Voltage = UomElectricPotential;

/// Reactive power shares the dimension of active power; values are read back in Mvar
/// through the megawatt unit.
pub type ReactivePower = UomPower;

#[inline]
pub fn km(v: f64) -> Length {
    use uom::si::length::kilometer;
    Length::new::<kilometer>(v)
}

#[inline]
pub fn ohm(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm as unit;
    Resistance::new::<unit>(v)
}

#[inline]
pub fn siemens(v: f64) -> Conductance {
    use uom::si::electrical_conductance::siemens as unit;
    Conductance::new::<unit>(v)
}

#[inline]
pub fn microsiemens(v: f64) -> Conductance {
    use uom::si::electrical_conductance::microsiemens as unit;
    Conductance::new::<unit>(v)
}

#[inline]
pub fn kv(v: f64) -> Voltage {
    use uom::si::electric_potential::kilovolt;
    Voltage::new::<kilovolt>(v)
}

#[inline]
pub fn mw(v: f64) -> Power {
    use uom::si::power::megawatt;
    Power::new::<megawatt>(v)
}

#[inline]
pub fn mvar(v: f64) -> ReactivePower {
    use uom::si::power::megawatt;
    ReactivePower::new::<megawatt>(v)
}

/// Read-back helpers in the engineering units the models are specified in.
pub mod eng {
    use super::*;

    #[inline]
    pub fn in_km(v: Length) -> f64 {
        v.get::<uom::si::length::kilometer>()
    }

    #[inline]
    pub fn in_ohm(v: Resistance) -> f64 {
        v.get::<uom::si::electrical_resistance::ohm>()
    }

    #[inline]
    pub fn in_siemens(v: Conductance) -> f64 {
        v.get::<uom::si::electrical_conductance::siemens>()
    }

    #[inline]
    pub fn in_kv(v: Voltage) -> f64 {
        v.get::<uom::si::electric_potential::kilovolt>()
    }

    #[inline]
    pub fn in_mw(v: Power) -> f64 {
        v.get::<uom::si::power::megawatt>()
    }

    #[inline]
    pub fn in_mvar(v: ReactivePower) -> f64 {
        v.get::<uom::si::power::megawatt>()
    }
}

/// Threshold voltage from which a line counts as part of the backbone grid.
pub mod constants {
    use super::*;

    pub const BACKBONE_KV: f64 = 330.0;

    #[inline]
    pub fn backbone_voltage() -> Voltage {
        kv(BACKBONE_KV)
    }
}
