use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::f64::consts::PI;

use crate::{
    orbit::solve_kepler,
    prelude::{AlmanacRecord, Config},
    tests::init_logger,
};

#[test]
fn kepler_convergence() {
    let cfg = Config::default();
    let mut rng = SmallRng::seed_from_u64(0);

    for _ in 0..10_000 {
        let e = rng.random_range(0.0..0.9);
        let m = rng.random_range(-4.0 * PI..4.0 * PI);

        let (e_k, iterations) =
            solve_kepler(m, e, cfg.kepler_max_iterations, cfg.kepler_tolerance_rad)
                .unwrap_or_else(|| panic!("kepler did not converge for e={} m={}", e, m));

        assert!(iterations <= cfg.kepler_max_iterations);
        assert!(
            (e_k - e * e_k.sin() - m).abs() < 1.0E-6,
            "e={} m={} E={}",
            e,
            m,
            e_k
        );
    }
}

#[test]
fn positions_stay_on_ellipse() {
    init_logger();

    let cfg = Config::default();
    let mut rng = SmallRng::seed_from_u64(1);

    for _ in 0..1_000 {
        let sqrt_a = rng.random_range(5_100.0..5_200.0);
        let record = AlmanacRecord {
            prn: rng.random_range(1..=32),
            eccentricity: rng.random_range(0.0..0.05),
            semi_major_axis_m: sqrt_a * sqrt_a,
            right_ascension_rad: rng.random_range(-PI..PI),
            arg_of_perigee_rad: rng.random_range(-PI..PI),
            mean_anomaly_rad: rng.random_range(-PI..PI),
            toa_s: rng.random_range(0.0..604_800.0),
            inclination_rad: rng.random_range(0.9..1.0),
            right_ascension_rate_rad_s: -8.0E-9,
            ..Default::default()
        };

        let t = rng.random_range(0.0..604_800.0);
        let position = record.position_at(t, &cfg).unwrap();

        let a = record.semi_major_axis_m;
        let e = record.eccentricity;
        let r = position.norm();
        assert!(r >= a * (1.0 - e) - 1.0E-3, "{:?} t={}", record, t);
        assert!(r <= a * (1.0 + e) + 1.0E-3, "{:?} t={}", record, t);

        // |z| bounded by inclination
        assert!(position[2].abs() <= r * record.inclination_rad.sin() + 1.0E-3);
    }
}
