//! Lithospheric strength envelopes.
//!
//! Computes the differential stress at which a rock yields at a given depth,
//! temperature and strain rate by combining Byerlee's frictional sliding with
//! thermally activated creep laws and keeping the weakest mechanism.

pub mod config;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod geotherm;
pub mod material;
pub mod material_catalog;
pub mod math_utils;
pub mod mechanism;
pub mod profile;
pub mod report;
pub mod stress_laws;

pub use config::EnvelopeConfig;
pub use envelope::{envelope_stress, evaluate_envelope, EnvelopeEvaluation, GoverningMechanism};
pub use error::{Result, RheologyError};
pub use geotherm::Geotherm;
pub use material::MaterialRecord;
pub use material_catalog::MaterialCatalog;
pub use mechanism::{Mechanism, MechanismSet, Mode};
pub use profile::{build_profile, build_profile_with_config, StrengthProfile};
