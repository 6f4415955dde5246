// src/material.rs - Rock material records for strength-envelope computation

use crate::error::{Result, RheologyError};
use crate::mechanism::Mechanism;
use serde::{Deserialize, Serialize};

/// Converts a dislocation pre-exponential factor given in GPa^-n/s to Pa^-n/s.
pub fn agpa_to_pa(a: f64, n: f64) -> f64 {
    a * 10.0_f64.powf(-9.0 * n)
}

/// Byerlee's law parameters. Always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrictionParams {
    pub f_f_e: f64, // friction coefficient, extension
    pub f_f_c: f64, // friction coefficient, compression
    pub f_p: f64,   // pore fluid factor
    pub rho_b: f64, // bulk density kg/m3
}

/// Power-law (dislocation) creep parameters. Always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DislocationParams {
    pub a_p: f64, // Pa^-n/s
    pub n: f64,
    pub q_p: f64, // J/mol
}

/// Newtonian (diffusion) creep parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffusionParams {
    pub a_f: f64, // 1/Pa/s
    pub q_f: f64, // J/mol
    pub a: f64,   // grain size m
    pub m: f64,   // grain size exponent
}

/// Dorn's law (low-temperature plasticity) parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DornParams {
    pub sigma_d: f64, // Pa
    pub q_d: f64,     // J/mol
    pub a_d: f64,     // 1/s
}

/// Physical constants of one rock type.
///
/// Diffusion creep and Dorn's law are each either fully defined or absent;
/// an absent group makes the matching stress law return NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRecord {
    pub name: String,
    pub altname: String,
    pub source: String,
    pub via: String,
    pub source_disloc: Option<String>,
    pub source_diff: Option<String>,
    pub source_dorn: Option<String>,

    pub friction: FrictionParams,
    pub dislocation: DislocationParams,
    pub diffusion: Option<DiffusionParams>,
    pub dorn: Option<DornParams>,
}

impl MaterialRecord {
    /// A record with only the mandatory groups and no metadata.
    pub fn new(name: &str, friction: FrictionParams, dislocation: DislocationParams) -> Self {
        Self {
            name: name.to_string(),
            altname: String::new(),
            source: String::new(),
            via: String::new(),
            source_disloc: None,
            source_diff: None,
            source_dorn: None,
            friction,
            dislocation,
            diffusion: None,
            dorn: None,
        }
    }

    pub fn with_diffusion(mut self, diffusion: DiffusionParams) -> Self {
        self.diffusion = Some(diffusion);
        self
    }

    pub fn with_dorn(mut self, dorn: DornParams) -> Self {
        self.dorn = Some(dorn);
        self
    }

    /// Whether the record carries the parameters `mechanism` needs.
    pub fn supports(&self, mechanism: Mechanism) -> bool {
        match mechanism {
            Mechanism::Dislocation => true,
            Mechanism::Diffusion => self.diffusion.is_some(),
            Mechanism::Dorn => self.dorn.is_some(),
        }
    }

    /// "name, source" label used when listing materials.
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.source)
    }
}

/// Flat catalog entry as stored in JSON, `null` marking absent parameters.
///
/// The dislocation pre-exponential may be given either in Pa (`a_p`) or in GPa (`a_p_gpa`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialEntry {
    pub name: String,
    pub altname: String,
    pub source: String,
    pub via: String,
    pub source_disloc: Option<String>,
    pub source_diff: Option<String>,
    pub source_dorn: Option<String>,

    pub f_f_e: Option<f64>,
    pub f_f_c: Option<f64>,
    pub f_p: Option<f64>,
    pub rho_b: Option<f64>,

    pub a_p: Option<f64>,
    pub a_p_gpa: Option<f64>,
    pub n: Option<f64>,
    pub q_p: Option<f64>,

    pub a_f: Option<f64>,
    pub q_f: Option<f64>,
    pub a: Option<f64>,
    pub m: Option<f64>,

    pub sigma_d: Option<f64>,
    pub q_d: Option<f64>,
    pub a_d: Option<f64>,
}

impl MaterialEntry {
    fn required(&self, value: Option<f64>, field: &'static str) -> Result<f64> {
        value.ok_or_else(|| RheologyError::MissingField {
            material: self.name.clone(),
            field,
        })
    }

    /// Collapses a parameter group: all present -> Some, all absent -> None, mixed -> error.
    fn group<const N: usize>(&self, values: [Option<f64>; N], group: &'static str) -> Result<Option<[f64; N]>> {
        let present = values.iter().filter(|v| v.is_some()).count();
        if present == 0 {
            return Ok(None);
        }
        if present < N {
            return Err(RheologyError::IncompleteGroup {
                material: self.name.clone(),
                group,
            });
        }
        Ok(Some(values.map(|v| v.unwrap_or(f64::NAN))))
    }
}

impl TryFrom<MaterialEntry> for MaterialRecord {
    type Error = RheologyError;

    fn try_from(entry: MaterialEntry) -> Result<Self> {
        let friction = FrictionParams {
            f_f_e: entry.required(entry.f_f_e, "f_f_e")?,
            f_f_c: entry.required(entry.f_f_c, "f_f_c")?,
            f_p: entry.required(entry.f_p, "f_p")?,
            rho_b: entry.required(entry.rho_b, "rho_b")?,
        };

        let n = entry.required(entry.n, "n")?;
        let a_p = match (entry.a_p, entry.a_p_gpa) {
            (Some(a_p), _) => a_p,
            (None, Some(a_gpa)) => agpa_to_pa(a_gpa, n),
            (None, None) => return Err(RheologyError::MissingField {
                material: entry.name.clone(),
                field: "a_p",
            }),
        };
        let dislocation = DislocationParams {
            a_p,
            n,
            q_p: entry.required(entry.q_p, "q_p")?,
        };

        let diffusion = entry
            .group([entry.a_f, entry.q_f, entry.a, entry.m], "diffusion creep")?
            .map(|[a_f, q_f, a, m]| DiffusionParams { a_f, q_f, a, m });

        let dorn = entry
            .group([entry.sigma_d, entry.q_d, entry.a_d], "Dorn's law")?
            .map(|[sigma_d, q_d, a_d]| DornParams { sigma_d, q_d, a_d });

        Ok(MaterialRecord {
            name: entry.name,
            altname: entry.altname,
            source: entry.source,
            via: entry.via,
            source_disloc: entry.source_disloc,
            source_diff: entry.source_diff,
            source_dorn: entry.source_dorn,
            friction,
            dislocation,
            diffusion,
            dorn,
        })
    }
}
