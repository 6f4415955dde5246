//! Differential stress at which each deformation mechanism activates.
//!
//! All laws return stress in Pa. Creep laws return NaN for a material that
//! lacks the mechanism's parameter group, and let NaN from out-of-domain
//! arithmetic (e.g. a negative `sqrt` argument in Dorn's law) pass through.
//! Argument checks (depth, temperature) happen once in the envelope selector.

use crate::constants::{GAS_CONSTANT_J_MOL_K, GRAVITY_M_S2};
use crate::material::MaterialRecord;
use crate::mechanism::Mode;

/// Byerlee's law: `f_f * rho_b * g * z * (1 - f_p)`.
///
/// # Arguments
/// - `z`: depth below surface in m
/// - `mode`: picks `f_f_c` (compression) or `f_f_e` (extension)
pub fn frictional_stress(material: &MaterialRecord, z: f64, mode: Mode) -> f64 {
    let friction = &material.friction;
    let f_f = match mode {
        Mode::Compression => friction.f_f_c,
        Mode::Extension => friction.f_f_e,
    };
    f_f * friction.rho_b * GRAVITY_M_S2 * z * (1.0 - friction.f_p)
}

/// Power-law creep: `(e / A_p)^(1/n) * exp(Q_p / (n R T))`.
pub fn dislocation_stress(material: &MaterialRecord, temp_k: f64, strain_rate: f64) -> f64 {
    let p = &material.dislocation;
    (strain_rate / p.a_p).powf(1.0 / p.n) * (p.q_p / (p.n * GAS_CONSTANT_J_MOL_K * temp_k)).exp()
}

/// Newtonian creep: `d^m * e / A_f * exp(Q_f / (R T))`. NaN without a diffusion group.
pub fn diffusion_stress(material: &MaterialRecord, temp_k: f64, strain_rate: f64) -> f64 {
    match &material.diffusion {
        Some(p) => p.a.powf(p.m) * strain_rate / p.a_f * (p.q_f / (GAS_CONSTANT_J_MOL_K * temp_k)).exp(),
        None => f64::NAN,
    }
}

/// Dorn's law, Peierls creep with exponent 2:
/// `sigma_d * (1 - sqrt(-R T / Q_d * ln(e / A_d)))`. NaN without a Dorn group.
pub fn dorn_stress(material: &MaterialRecord, temp_k: f64, strain_rate: f64) -> f64 {
    match &material.dorn {
        Some(p) => {
            let activation = -GAS_CONSTANT_J_MOL_K * temp_k / p.q_d * (strain_rate / p.a_d).ln();
            p.sigma_d * (1.0 - activation.sqrt())
        }
        None => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{DiffusionParams, DislocationParams, DornParams, FrictionParams};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use more_asserts::{assert_ge, assert_gt, assert_lt};

    fn dry_olivine() -> MaterialRecord {
        MaterialRecord::new(
            "olivine_dry",
            FrictionParams { f_f_e: 0.75, f_f_c: 3.0, f_p: 0.35, rho_b: 3300.0 },
            DislocationParams { a_p: 7.0e-14, n: 3.0, q_p: 510.0e3 },
        )
        .with_dorn(DornParams { sigma_d: 8.5e9, q_d: 535.0e3, a_d: 5.7e11 })
    }

    fn dry_peridotite() -> MaterialRecord {
        MaterialRecord::new(
            "peridotite_dry",
            FrictionParams { f_f_e: 0.75, f_f_c: 3.0, f_p: 0.35, rho_b: 3280.0 },
            DislocationParams { a_p: 5.011e-17, n: 3.5, q_p: 535.0e3 },
        )
        .with_diffusion(DiffusionParams { a_f: 2.57e-11, q_f: 300.0e3, a: 1.0e-4, m: 2.5 })
        .with_dorn(DornParams { sigma_d: 8.5e9, q_d: 535.0e3, a_d: 5.754e11 })
    }

    #[test]
    fn test_frictional_stress_vanishes_at_surface() {
        let olivine = dry_olivine();
        for mode in Mode::ALL {
            assert_eq!(frictional_stress(&olivine, 0.0, mode), 0.0);
        }
    }

    #[test]
    fn test_frictional_stress_at_50_km() {
        let olivine = dry_olivine();

        let extension = frictional_stress(&olivine, 50_000.0, Mode::Extension);
        assert_relative_eq!(extension, 0.75 * 3300.0 * 9.81 * 50_000.0 * 0.65, max_relative = 1e-12);
        assert_abs_diff_eq!(extension, 7.89e8, epsilon = 0.01e8);

        let compression = frictional_stress(&olivine, 50_000.0, Mode::Compression);
        assert_relative_eq!(compression, 4.0 * extension, max_relative = 1e-12);
    }

    #[test]
    fn test_compression_at_least_extension_when_friction_is_higher() {
        let olivine = dry_olivine();
        for z in [1.0, 1_000.0, 12_345.0, 80_000.0] {
            assert_ge!(
                frictional_stress(&olivine, z, Mode::Compression),
                frictional_stress(&olivine, z, Mode::Extension)
            );
        }

        let mut symmetric = dry_olivine();
        symmetric.friction.f_f_c = symmetric.friction.f_f_e;
        assert_eq!(
            frictional_stress(&symmetric, 30_000.0, Mode::Compression),
            frictional_stress(&symmetric, 30_000.0, Mode::Extension)
        );
    }

    #[test]
    fn test_dislocation_stress_matches_power_law() {
        let olivine = dry_olivine();
        let (t, e): (f64, f64) = (1200.0, 1.0e-16);

        let expected = (e / 7.0e-14_f64).powf(1.0 / 3.0) * (510.0e3 / (3.0 * 8.314472 * t)).exp();
        assert_relative_eq!(dislocation_stress(&olivine, t, e), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_dislocation_stress_softens_with_temperature_and_hardens_with_rate() {
        let olivine = dry_olivine();
        assert_gt!(dislocation_stress(&olivine, 900.0, 1e-15), dislocation_stress(&olivine, 1300.0, 1e-15));
        assert_lt!(dislocation_stress(&olivine, 1100.0, 1e-17), dislocation_stress(&olivine, 1100.0, 1e-13));
    }

    #[test]
    fn test_diffusion_stress() {
        let peridotite = dry_peridotite();
        let (t, e): (f64, f64) = (1400.0, 1.0e-15);

        let expected = 1.0e-4_f64.powf(2.5) * e / 2.57e-11 * (300.0e3 / (8.314472 * t)).exp();
        assert_relative_eq!(diffusion_stress(&peridotite, t, e), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_missing_groups_give_nan() {
        let olivine = dry_olivine();
        let bare = MaterialRecord::new("bare", olivine.friction, olivine.dislocation);

        for t in [300.0, 800.0, 1600.0] {
            for e in [1e-18, 1e-15, 1e-12] {
                assert!(diffusion_stress(&olivine, t, e).is_nan());
                assert!(dorn_stress(&bare, t, e).is_nan());
                assert!(!dislocation_stress(&bare, t, e).is_nan());
            }
        }
    }

    #[test]
    fn test_dorn_stress() {
        let olivine = dry_olivine();
        let (t, e): (f64, f64) = (1200.0, 1.0e-16);

        let activation = -8.314472 * t / 535.0e3 * (e / 5.7e11_f64).ln();
        let expected = 8.5e9 * (1.0 - activation.sqrt());
        assert_relative_eq!(dorn_stress(&olivine, t, e), expected, max_relative = 1e-12);
        assert_lt!(dorn_stress(&olivine, t, e), 8.5e9);
    }

    #[test]
    fn test_dorn_stress_out_of_domain_is_nan() {
        // strain rate above A_d makes ln positive and the sqrt argument negative
        let olivine = dry_olivine();
        assert!(dorn_stress(&olivine, 1000.0, 1.0e12).is_nan());
    }
}
