//! Depth-to-temperature tables for a lithosphere column.

use crate::constants::{M_PER_KM, TO_KELVIN};
use crate::error::{Result, RheologyError};
use crate::math_utils::{interp, linspace};

/// Ascending depth (m) / temperature (K) knots, interpolated linearly.
#[derive(Debug, Clone, PartialEq)]
pub struct Geotherm {
    depths_m: Vec<f64>,
    temps_k: Vec<f64>,
}

impl Geotherm {
    pub fn new(depths_m: Vec<f64>, temps_k: Vec<f64>) -> Result<Self> {
        if depths_m.len() != temps_k.len() || depths_m.is_empty() {
            return Err(RheologyError::LengthMismatch {
                depths: depths_m.len(),
                temperatures: temps_k.len(),
            });
        }
        if let Some(index) = first_unsorted(&depths_m) {
            return Err(RheologyError::UnsortedDepths { index });
        }
        if let Some(&t) = temps_k.iter().find(|t| !(**t > 0.0)) {
            return Err(RheologyError::NonPositiveTemperature(t));
        }
        Ok(Self { depths_m, temps_k })
    }

    /// Builds a geotherm from (depth km, temperature °C) pairs, the usual published form.
    ///
    /// Celsius is offset by the exact 273.15 K rather than a rounded 273 K.
    pub fn from_km_celsius(points: &[(f64, f64)]) -> Result<Self> {
        let (depths, temps): (Vec<f64>, Vec<f64>) = points
            .iter()
            .map(|&(km, c)| (km * M_PER_KM, c + TO_KELVIN))
            .unzip();
        Self::new(depths, temps)
    }

    /// Linear gradient from a surface temperature (K) at 0 m.
    pub fn linear(surface_temp_k: f64, gradient_k_per_km: f64, max_depth_m: f64) -> Result<Self> {
        let bottom = surface_temp_k + gradient_k_per_km * max_depth_m / M_PER_KM;
        Self::new(vec![0.0, max_depth_m], vec![surface_temp_k, bottom])
    }

    /// Temperature at `depth_m`; held constant beyond the first and last knots.
    pub fn temperature_at(&self, depth_m: f64) -> f64 {
        interp(depth_m, &self.depths_m, &self.temps_k)
    }

    /// Evenly spaced depths from the surface to `max_depth_m` with their temperatures.
    pub fn sample(&self, max_depth_m: f64, points: usize) -> (Vec<f64>, Vec<f64>) {
        let depths = linspace(0.0, max_depth_m, points);
        let temps = depths.iter().map(|&z| self.temperature_at(z)).collect();
        (depths, temps)
    }

    pub fn depths(&self) -> &[f64] {
        &self.depths_m
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temps_k
    }
}

/// Index of the first sample shallower than its predecessor.
pub(crate) fn first_unsorted(depths: &[f64]) -> Option<usize> {
    depths.windows(2).position(|w| w[1] < w[0]).map(|i| i + 1)
}
