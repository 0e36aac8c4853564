//! Unit conversions at the form boundary.
//!
//! Raw inputs arrive in form units (mΩ, ns, kHz). Everything downstream of
//! parameter resolution works in SI units (Ω, s, Hz). Thermal resistances
//! (°C/W) and temperatures (°C) cross the boundary unchanged.

use uom::si::electrical_resistance::{milliohm, ohm};
use uom::si::f64::{ElectricalResistance, Frequency, Time};
use uom::si::frequency::{hertz, kilohertz};
use uom::si::time::{nanosecond, second};

/// Converts an on-resistance in mΩ to Ω.
#[must_use]
pub fn ohms_from_milliohms(milliohms: f64) -> f64 {
    ElectricalResistance::new::<milliohm>(milliohms).get::<ohm>()
}

/// Converts an on-resistance in Ω back to mΩ.
#[must_use]
pub fn milliohms_from_ohms(ohms: f64) -> f64 {
    ElectricalResistance::new::<ohm>(ohms).get::<milliohm>()
}

/// Converts a switching transition time in ns to s.
#[must_use]
pub fn seconds_from_nanoseconds(nanoseconds: f64) -> f64 {
    Time::new::<nanosecond>(nanoseconds).get::<second>()
}

/// Converts a switching transition time in s back to ns.
#[must_use]
pub fn nanoseconds_from_seconds(seconds: f64) -> f64 {
    Time::new::<second>(seconds).get::<nanosecond>()
}

/// Converts a switching frequency in kHz to Hz.
#[must_use]
pub fn hertz_from_kilohertz(kilohertz_value: f64) -> f64 {
    Frequency::new::<kilohertz>(kilohertz_value).get::<hertz>()
}

/// Converts a switching frequency in Hz back to kHz.
#[must_use]
pub fn kilohertz_from_hertz(hertz_value: f64) -> f64 {
    Frequency::new::<hertz>(hertz_value).get::<kilohertz>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn converts_milliohms_to_ohms() {
        assert_relative_eq!(ohms_from_milliohms(17.5), 0.0175);
        assert_relative_eq!(ohms_from_milliohms(0.0), 0.0);
    }

    #[test]
    fn converts_nanoseconds_to_seconds() {
        assert_relative_eq!(seconds_from_nanoseconds(50.0), 50.0e-9);
    }

    #[test]
    fn converts_kilohertz_to_hertz() {
        assert_relative_eq!(hertz_from_kilohertz(100.0), 100_000.0);
    }

    #[test]
    fn round_trips_preserve_magnitude() {
        assert_relative_eq!(
            milliohms_from_ohms(ohms_from_milliohms(17.5)),
            17.5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            nanoseconds_from_seconds(seconds_from_nanoseconds(45.0)),
            45.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            kilohertz_from_hertz(hertz_from_kilohertz(250.0)),
            250.0,
            max_relative = 1e-12
        );
    }
}
