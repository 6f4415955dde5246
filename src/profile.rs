// src/profile.rs - Compression/extension strength envelope over a depth series

use crate::config::EnvelopeConfig;
use crate::constants::{M_PER_KM, PA_PER_GPA, PARALLEL_PROFILE_THRESHOLD};
use crate::envelope::envelope_stress;
use crate::error::{Result, RheologyError};
use crate::geotherm::first_unsorted;
use crate::material::MaterialRecord;
use crate::material_catalog::MaterialCatalog;
use crate::math_utils::nan_min;
use crate::mechanism::{MechanismSet, Mode};
use colored::Colorize;
use rayon::prelude::*;

/// Closed stress-depth curve: the compression branch top to bottom, then the
/// extension branch bottom to top.
///
/// Compression stresses carry a negative sign. `depths[i]` is the depth of `stresses[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrengthProfile {
    pub stresses: Vec<f64>,
    pub depths: Vec<f64>,
}

impl StrengthProfile {
    /// Total number of points, twice the number of depth samples.
    pub fn len(&self) -> usize {
        self.stresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stresses.is_empty()
    }

    /// Number of depth samples the profile was built from.
    pub fn samples(&self) -> usize {
        self.stresses.len() / 2
    }

    /// Compression branch, in input depth order.
    pub fn compression(&self) -> &[f64] {
        &self.stresses[..self.samples()]
    }

    /// Extension branch, deepest sample first.
    pub fn extension(&self) -> &[f64] {
        &self.stresses[self.samples()..]
    }

    /// Largest compressive strength magnitude (Pa).
    pub fn max_compressive_strength(&self) -> f64 {
        -nan_min(self.compression().iter().copied())
    }

    /// Largest extensional strength (Pa).
    pub fn max_tensile_strength(&self) -> f64 {
        -nan_min(self.extension().iter().map(|s| -s))
    }

    /// Stresses in GPa and depths in km, the units strength envelopes are drawn in.
    pub fn to_gpa_km(&self) -> (Vec<f64>, Vec<f64>) {
        (
            self.stresses.iter().map(|s| s / PA_PER_GPA).collect(),
            self.depths.iter().map(|z| z / M_PER_KM).collect(),
        )
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.stresses, self.depths)
    }
}

fn validate_series(depths: &[f64], temperatures: &[f64]) -> Result<()> {
    if depths.len() != temperatures.len() {
        return Err(RheologyError::LengthMismatch {
            depths: depths.len(),
            temperatures: temperatures.len(),
        });
    }
    if let Some(index) = first_unsorted(depths) {
        return Err(RheologyError::UnsortedDepths { index });
    }
    Ok(())
}

/// (compression, extension) stress at one sample, compression negated.
fn sample_pair(
    material: &MaterialRecord,
    depth_m: f64,
    temp_k: f64,
    strain_rate: f64,
    mechanisms: MechanismSet,
) -> Result<(f64, f64)> {
    let compression = envelope_stress(material, depth_m, temp_k, strain_rate, mechanisms, Mode::Compression)?;
    let extension = envelope_stress(material, depth_m, temp_k, strain_rate, mechanisms, Mode::Extension)?;
    Ok((-compression, extension))
}

/// Strength envelope for both loading modes with the given settings.
///
/// # Arguments
/// - `depths`: ascending depths in m
/// - `temperatures`: temperatures in K, one per depth
///
/// # Errors
/// Mismatched or unsorted series, or any sample rejected by the envelope selector.
/// No partial profile is returned.
pub fn build_profile_with_config(
    material: &MaterialRecord,
    depths: &[f64],
    temperatures: &[f64],
    config: &EnvelopeConfig,
) -> Result<StrengthProfile> {
    validate_series(depths, temperatures)?;

    let strain_rate = config.strain_rate;
    let mechanisms = config.mechanisms;

    let pairs: Vec<(f64, f64)> = if config.parallel && depths.len() >= PARALLEL_PROFILE_THRESHOLD {
        depths
            .par_iter()
            .zip(temperatures.par_iter())
            .map(|(&z, &t)| sample_pair(material, z, t, strain_rate, mechanisms))
            .collect::<Result<Vec<_>>>()?
    } else {
        depths
            .iter()
            .zip(temperatures)
            .map(|(&z, &t)| sample_pair(material, z, t, strain_rate, mechanisms))
            .collect::<Result<Vec<_>>>()?
    };

    let n = pairs.len();
    let mut stresses = Vec::with_capacity(2 * n);
    stresses.extend(pairs.iter().map(|&(c, _)| c));
    stresses.extend(pairs.iter().rev().map(|&(_, e)| e));

    let mut depths_out = Vec::with_capacity(2 * n);
    depths_out.extend_from_slice(depths);
    depths_out.extend(depths.iter().rev());

    let profile = StrengthProfile {
        stresses,
        depths: depths_out,
    };

    if config.debug_output {
        println!(
            "{} {:<30} | samples: {:>5} | e: {:.1e}/s | max compression: {:>7.3} GPa | max extension: {:>7.3} GPa",
            "📈".bold(),
            material.name.cyan(),
            n,
            strain_rate,
            profile.max_compressive_strength() / PA_PER_GPA,
            profile.max_tensile_strength() / PA_PER_GPA,
        );
    }

    Ok(profile)
}

/// Strength envelope with the default mechanisms (dislocation creep and Dorn's law).
///
/// Returns `(stresses, depths)`, each `2 * depths.len()` long; see [`StrengthProfile`].
pub fn build_profile(
    material: &MaterialRecord,
    depths: &[f64],
    temperatures: &[f64],
    strain_rate: f64,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let config = EnvelopeConfig::with_strain_rate(strain_rate);
    build_profile_with_config(material, depths, temperatures, &config).map(StrengthProfile::into_parts)
}

/// Profiles for every material in the catalog, ordered by material name.
pub fn build_catalog_profiles(
    catalog: &MaterialCatalog,
    depths: &[f64],
    temperatures: &[f64],
    config: &EnvelopeConfig,
) -> Result<Vec<(String, StrengthProfile)>> {
    catalog
        .sorted_by_name()
        .into_iter()
        .map(|material| {
            build_profile_with_config(material, depths, temperatures, config)
                .map(|profile| (material.name.clone(), profile))
        })
        .collect()
}
