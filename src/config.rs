//! Settings for envelope and profile evaluation.

use crate::constants::DEFAULT_STRAIN_RATE;
use crate::error::Result;
use crate::mechanism::MechanismSet;
use serde::{Deserialize, Serialize};

/// Evaluation settings passed explicitly to every profile computation.
///
/// Units:
/// - strain rate: 1/s
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeConfig {
    pub strain_rate: f64,
    pub mechanisms: MechanismSet,
    pub parallel: bool,     // evaluate long depth series with rayon
    pub debug_output: bool, // print a summary line per profile
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            strain_rate: DEFAULT_STRAIN_RATE,
            mechanisms: MechanismSet::default(),
            parallel: true,
            debug_output: false,
        }
    }
}

impl EnvelopeConfig {
    pub fn with_strain_rate(strain_rate: f64) -> Self {
        Self {
            strain_rate,
            ..Self::default()
        }
    }

    pub fn mechanisms(mut self, mechanisms: MechanismSet) -> Self {
        self.mechanisms = mechanisms;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn with_debug(mut self) -> Self {
        self.debug_output = true;
        self
    }

    /// Reads settings from JSON; omitted keys keep their defaults.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}
