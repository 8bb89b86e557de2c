#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::constants::{KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE_RAD};

fn default_kepler_max_iterations() -> usize {
    KEPLER_MAX_ITERATIONS
}

fn default_kepler_tolerance_rad() -> f64 {
    KEPLER_TOLERANCE_RAD
}

/// Position solver [Config]uration.
/// Physical constants are not configurable, only the numerical
/// behavior of the Kepler solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Maximal number of fixed point iterations when solving
    /// the Kepler equation, before giving up.
    #[cfg_attr(feature = "serde", serde(default = "default_kepler_max_iterations"))]
    pub kepler_max_iterations: usize,

    /// Kepler iteration stops once two successive eccentric anomaly
    /// estimates differ by less than this (radians).
    #[cfg_attr(feature = "serde", serde(default = "default_kepler_tolerance_rad"))]
    pub kepler_tolerance_rad: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kepler_max_iterations: default_kepler_max_iterations(),
            kepler_tolerance_rad: default_kepler_tolerance_rad(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated iteration budget
    pub fn with_kepler_max_iterations(&self, max_iterations: usize) -> Self {
        let mut s = self.clone();
        s.kepler_max_iterations = max_iterations;
        s
    }

    /// Copies and returns [Config] with updated convergence criterion
    pub fn with_kepler_tolerance_rad(&self, tolerance_rad: f64) -> Self {
        let mut s = self.clone();
        s.kepler_tolerance_rad = tolerance_rad;
        s
    }
}

#[cfg(test)]
mod test {
    use super::Config;

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.kepler_max_iterations, 200);
        assert_eq!(cfg.kepler_tolerance_rad, 1.0E-8);

        let cfg = cfg.with_kepler_max_iterations(10).with_kepler_tolerance_rad(1.0E-12);
        assert_eq!(cfg.kepler_max_iterations, 10);
        assert_eq!(cfg.kepler_tolerance_rad, 1.0E-12);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn config_deserialization() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());

        let cfg: Config = serde_json::from_str(r#"{ "kepler_max_iterations": 50 }"#).unwrap();
        assert_eq!(cfg.kepler_max_iterations, 50);
        assert_eq!(cfg.kepler_tolerance_rad, 1.0E-8);
    }
}
