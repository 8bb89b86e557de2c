use log::{debug, error};
use nalgebra::{Rotation3, Vector3};

use crate::{
    almanac::AlmanacRecord, cfg::Config, constants::EARTH_ANGULAR_VEL_RAD, error::Error,
};

/// Solves the Kepler equation `E = M + e sin(E)` by fixed point
/// iteration, starting from `E = M`.
/// Returns the eccentric anomaly and the number of iterations it took,
/// or None if `max_iterations` was reached without converging.
pub(crate) fn solve_kepler(
    mean_anomaly_rad: f64,
    eccentricity: f64,
    max_iterations: usize,
    tolerance_rad: f64,
) -> Option<(f64, usize)> {
    let mut e_k = mean_anomaly_rad;

    for i in 1..=max_iterations {
        let e_k_next = mean_anomaly_rad + eccentricity * e_k.sin();
        if (e_k_next - e_k).abs() < tolerance_rad {
            return Some((e_k_next, i));
        }
        e_k = e_k_next;
    }

    None
}

impl AlmanacRecord {
    /// Resolves ECEF coordinates (in meters) at `t_gps_s`, expressed
    /// in GPS seconds of week. Simplified Keplerian model: no harmonic
    /// corrections, no week rollover on `t - toa`.
    pub fn position_at(&self, t_gps_s: f64, cfg: &Config) -> Result<Vector3<f64>, Error> {
        let e = self.eccentricity;
        let a = self.semi_major_axis_m;

        let dt = t_gps_s - self.toa_s;
        let n = self.mean_motion_rad_s();
        let m = self.mean_anomaly_rad + n * dt;

        let Some((e_k, iterations)) =
            solve_kepler(m, e, cfg.kepler_max_iterations, cfg.kepler_tolerance_rad)
        else {
            error!("{}(t={}) - kepler solver in failure", self.sv(), t_gps_s);
            return Err(Error::KeplerNonConvergence(self.sv()));
        };

        let (sin_e_k, cos_e_k) = e_k.sin_cos();
        let v_k = ((1.0 - e.powi(2)).sqrt() * sin_e_k).atan2(cos_e_k - e);

        let u_k = v_k + self.arg_of_perigee_rad;
        let r_k = a * (1.0 - e * cos_e_k);

        let omega_k = self.right_ascension_rad
            + (self.right_ascension_rate_rad_s - EARTH_ANGULAR_VEL_RAD) * dt
            - EARTH_ANGULAR_VEL_RAD * self.toa_s;

        let (sin_u_k, cos_u_k) = u_k.sin_cos();
        let orbital_plane = Vector3::new(r_k * cos_u_k, r_k * sin_u_k, 0.0);

        // orbital plane to ECEF rotation
        let rot_x3 = Rotation3::from_axis_angle(&Vector3::x_axis(), self.inclination_rad);
        let rot_z3 = Rotation3::from_axis_angle(&Vector3::z_axis(), omega_k);
        let ecef = (rot_z3 * rot_x3) * orbital_plane;

        debug!(
            "{}(t={}) - kepler solving x={}, y={}, z={} dt={} iter={}",
            self.sv(),
            t_gps_s,
            ecef[0],
            ecef[1],
            ecef[2],
            dt,
            iterations
        );

        Ok(ecef)
    }
}
