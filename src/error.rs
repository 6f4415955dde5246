use thiserror::Error;

/// Errors raised by the strength-envelope engine and its material catalog.
///
/// Missing mechanism groups and out-of-domain creep arithmetic are not
/// errors; they surface as NaN stresses and drop out of the envelope minimum.
#[derive(Error, Debug)]
pub enum RheologyError {
    #[error("Depth must not be negative. Got z = {0} m")]
    NegativeDepth(f64),
    #[error("Temperature must be above 0 K. Got T = {0} K")]
    NonPositiveTemperature(f64),
    #[error("Invalid parameter for mode: '{0}'")]
    UnknownMode(String),
    #[error("Unknown mechanism keyword: '{0}'")]
    UnknownMechanism(String),
    #[error("Depth and temperature series differ in length ({depths} vs {temperatures})")]
    LengthMismatch { depths: usize, temperatures: usize },
    #[error("Depths must be ascending; sample {index} is shallower than its predecessor")]
    UnsortedDepths { index: usize },
    #[error("Material '{0}' not found in catalog")]
    UnknownMaterial(String),
    #[error("Material '{material}' defines only part of the {group} parameter group")]
    IncompleteGroup { material: String, group: &'static str },
    #[error("Material '{material}' is missing required field '{field}'")]
    MissingField { material: String, field: &'static str },
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl RheologyError {
    /// True for the conditions caused by a bad call argument rather than bad catalog data.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RheologyError::NegativeDepth(_)
                | RheologyError::NonPositiveTemperature(_)
                | RheologyError::UnknownMode(_)
                | RheologyError::UnknownMechanism(_)
                | RheologyError::LengthMismatch { .. }
                | RheologyError::UnsortedDepths { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RheologyError>;
