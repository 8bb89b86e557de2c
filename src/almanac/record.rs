use hifitime::Unit;

use crate::{
    constants::EARTH_GRAVITATION_MU_M3_S2,
    prelude::{Constellation, Duration, Epoch, TimeScale, SV},
};

/// [AlmanacRecord] holds the orbital elements broadcasted for
/// one satellite. It is immutable once parsed.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AlmanacRecord {
    /// Satellite PRN number
    pub prn: u8,

    /// Health code (0 means healthy), informational only
    pub health: u32,

    /// Eccentricity
    pub eccentricity: f64,

    /// Semi-major axis (in meters), squared from the broadcast √A.
    pub semi_major_axis_m: f64,

    /// Longitude of ascending node at reference time (in radians)
    pub right_ascension_rad: f64,

    /// (in radians)
    pub arg_of_perigee_rad: f64,

    /// Mean anomaly at time of almanac (in radians)
    pub mean_anomaly_rad: f64,

    /// Time of almanac, in GPS seconds of week
    pub toa_s: f64,

    /// (in radians), 54° reference already applied
    pub inclination_rad: f64,

    /// Rate of right ascension (in radians/s)
    pub right_ascension_rate_rad_s: f64,

    /// Clock offset (af0, in seconds)
    pub clock_offset_s: f64,

    /// Clock drift (af1, in s/s)
    pub clock_drift_s_s: f64,

    /// GPS week
    pub gps_week: u32,
}

impl AlmanacRecord {
    /// Returns [SV] described by this [AlmanacRecord]
    pub fn sv(&self) -> SV {
        SV::new(Constellation::GPS, self.prn)
    }

    /// True when satellite is declared healthy
    pub fn is_healthy(&self) -> bool {
        self.health == 0
    }

    /// Mean motion (in radians/s)
    pub fn mean_motion_rad_s(&self) -> f64 {
        (EARTH_GRAVITATION_MU_M3_S2 / self.semi_major_axis_m.powi(3)).sqrt()
    }

    /// Returns the orbital period as [Duration]
    pub fn orbital_period(&self) -> Duration {
        2.0 * std::f64::consts::PI / self.mean_motion_rad_s() * Unit::Second
    }

    /// Returns time of almanac as GPST [Epoch]
    /// Negative or NaN time of almanac (only possible on hand built records)
    /// is clamped to the start of the week.
    pub fn toa_epoch(&self) -> Epoch {
        let nanos = (self.toa_s * 1.0E9).round().max(0.0) as u64;
        Epoch::from_time_of_week(self.gps_week, nanos, TimeScale::GPST)
    }

    /// Satellite clock correction (in seconds), `dt_s` seconds
    /// after time of almanac.
    pub fn clock_correction_s(&self, dt_s: f64) -> f64 {
        self.clock_offset_s + self.clock_drift_s_s * dt_s
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn record() -> AlmanacRecord {
        AlmanacRecord {
            prn: 7,
            health: 0,
            eccentricity: 0.01,
            semi_major_axis_m: 5153.6_f64.powi(2),
            toa_s: 405_504.0,
            clock_offset_s: 1.0E-4,
            clock_drift_s_s: 2.0E-12,
            gps_week: 2296,
            ..Default::default()
        }
    }

    #[test]
    fn sv_identity() {
        let record = record();
        assert_eq!(record.sv(), SV::new(Constellation::GPS, 7));
        assert!(record.is_healthy());

        let unhealthy = AlmanacRecord {
            health: 63,
            ..record
        };
        assert!(!unhealthy.is_healthy());
    }

    #[test]
    fn gps_orbital_period() {
        // GPS: half a sidereal day
        let period_s = record().orbital_period().to_seconds();
        assert!((period_s - 43_077.0).abs() < 60.0, "{}", period_s);
    }

    #[test]
    fn time_of_almanac() {
        let toa = record().toa_epoch();
        assert_eq!(toa.time_scale, TimeScale::GPST);
        assert_eq!(toa.to_time_of_week(), (2296, 405_504_000_000_000));
    }

    #[test]
    fn clock_correction() {
        let record = record();
        assert_eq!(record.clock_correction_s(0.0), 1.0E-4);
        assert!((record.clock_correction_s(1000.0) - (1.0E-4 + 2.0E-9)).abs() < 1.0E-15);
    }
}
