// src/envelope.rs - Governing (weakest) deformation mechanism at one depth

use crate::constants::DORN_SWITCH_STRESS_PA;
use crate::error::{Result, RheologyError};
use crate::material::MaterialRecord;
use crate::math_utils::nan_min;
use crate::mechanism::{Mechanism, MechanismSet, Mode};
use crate::stress_laws::{diffusion_stress, dislocation_stress, dorn_stress, frictional_stress};

/// Mechanism that sets the envelope stress at a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoverningMechanism {
    Frictional,
    Creep(Mechanism),
}

/// Every candidate stress evaluated at one depth, and which one governs.
///
/// Candidates that were not evaluated, or whose material group is absent, are NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeEvaluation {
    pub byerlee: f64,
    pub creep: f64,
    pub creep_mechanism: Option<Mechanism>,
    pub diffusion: f64,
    pub governing: f64,
    pub governing_mechanism: Option<GoverningMechanism>,
}

/// Picks the power-law or low-temperature creep law for the current frictional stress.
///
/// With both enabled, dislocation creep applies above 200 MPa of frictional
/// stress and Dorn's law at or below it.
pub fn creep_mechanism(s_byerlee: f64, enabled: MechanismSet) -> Option<Mechanism> {
    let dislocation = enabled.contains(Mechanism::Dislocation);
    let dorn = enabled.contains(Mechanism::Dorn);
    match (dislocation, dorn) {
        (true, true) if s_byerlee > DORN_SWITCH_STRESS_PA => Some(Mechanism::Dislocation),
        (true, true) => Some(Mechanism::Dorn),
        (true, false) => Some(Mechanism::Dislocation),
        (false, true) => Some(Mechanism::Dorn),
        (false, false) => None,
    }
}

/// Evaluates the envelope at one depth and reports every candidate.
///
/// # Arguments
/// - `depth_m`: depth below surface, must be >= 0
/// - `temp_k`: absolute temperature, must be > 0
/// - `strain_rate`: reference strain rate in 1/s
///
/// # Errors
/// `NegativeDepth` or `NonPositiveTemperature`; nothing is evaluated in that case.
pub fn evaluate_envelope(
    material: &MaterialRecord,
    depth_m: f64,
    temp_k: f64,
    strain_rate: f64,
    enabled: MechanismSet,
    mode: Mode,
) -> Result<EnvelopeEvaluation> {
    if !(depth_m >= 0.0) {
        return Err(RheologyError::NegativeDepth(depth_m));
    }
    if !(temp_k > 0.0) {
        return Err(RheologyError::NonPositiveTemperature(temp_k));
    }

    let byerlee = frictional_stress(material, depth_m, mode);

    let diffusion = if enabled.contains(Mechanism::Diffusion) {
        diffusion_stress(material, temp_k, strain_rate)
    } else {
        f64::NAN
    };

    let creep_mechanism = creep_mechanism(byerlee, enabled);
    let creep = match creep_mechanism {
        Some(Mechanism::Dislocation) => dislocation_stress(material, temp_k, strain_rate),
        Some(Mechanism::Dorn) => dorn_stress(material, temp_k, strain_rate),
        Some(Mechanism::Diffusion) | None => f64::NAN,
    };

    let governing = nan_min([byerlee, creep, diffusion]);
    // ties resolve in candidate order: friction, creep, diffusion
    let governing_mechanism = if governing.is_nan() {
        None
    } else if byerlee == governing {
        Some(GoverningMechanism::Frictional)
    } else if creep == governing {
        creep_mechanism.map(GoverningMechanism::Creep)
    } else {
        Some(GoverningMechanism::Creep(Mechanism::Diffusion))
    };

    Ok(EnvelopeEvaluation {
        byerlee,
        creep,
        creep_mechanism,
        diffusion,
        governing,
        governing_mechanism,
    })
}

/// Differential stress (Pa) of the weakest enabled mechanism at one depth.
///
/// NaN candidates (absent mechanism groups, out-of-domain creep arithmetic)
/// never govern. The result is unsigned; the profile builder applies the
/// compression sign.
pub fn envelope_stress(
    material: &MaterialRecord,
    depth_m: f64,
    temp_k: f64,
    strain_rate: f64,
    enabled: MechanismSet,
    mode: Mode,
) -> Result<f64> {
    evaluate_envelope(material, depth_m, temp_k, strain_rate, enabled, mode).map(|e| e.governing)
}

/// String-keyed form of [`envelope_stress`] for callers holding keyword lists.
///
/// `mechanisms` of `None` selects the default set.
pub fn envelope_stress_by_name<S: AsRef<str>>(
    material: &MaterialRecord,
    depth_m: f64,
    temp_k: f64,
    strain_rate: f64,
    mechanisms: Option<&[S]>,
    mode: &str,
) -> Result<f64> {
    let mode: Mode = mode.parse()?;
    let enabled = match mechanisms {
        Some(names) => MechanismSet::from_names(names)?,
        None => MechanismSet::default(),
    };
    envelope_stress(material, depth_m, temp_k, strain_rate, enabled, mode)
}
