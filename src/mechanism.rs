// src/mechanism.rs - Loading modes and creep mechanism selection

use crate::error::{Result, RheologyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tectonic loading mode; selects the friction coefficient of Byerlee's law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Compression,
    Extension,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Compression, Mode::Extension];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Compression => "compression",
            Mode::Extension => "extension",
        }
    }
}

impl FromStr for Mode {
    type Err = RheologyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "compression" => Ok(Mode::Compression),
            "extension" => Ok(Mode::Extension),
            other => Err(RheologyError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thermally activated deformation mechanisms the envelope can be asked to evaluate.
///
/// Frictional sliding is not listed: it is always part of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mechanism {
    Dislocation,
    Diffusion,
    Dorn,
}

impl Mechanism {
    pub const ALL: [Mechanism; 3] = [Mechanism::Dislocation, Mechanism::Diffusion, Mechanism::Dorn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mechanism::Dislocation => "dislocation",
            Mechanism::Diffusion => "diffusion",
            Mechanism::Dorn => "dorn",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl FromStr for Mechanism {
    type Err = RheologyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dislocation" => Ok(Mechanism::Dislocation),
            "diffusion" => Ok(Mechanism::Diffusion),
            "dorn" => Ok(Mechanism::Dorn),
            other => Err(RheologyError::UnknownMechanism(other.to_string())),
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of enabled creep mechanisms. Defaults to dislocation creep plus Dorn's law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MechanismSet {
    bits: u8,
}

impl MechanismSet {
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn all() -> Self {
        Mechanism::ALL.into_iter().collect()
    }

    /// Parses mechanism keywords; any unrecognized name rejects the whole set.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        names
            .iter()
            .map(|name| name.as_ref().parse::<Mechanism>())
            .collect()
    }

    pub fn with(mut self, mechanism: Mechanism) -> Self {
        self.insert(mechanism);
        self
    }

    pub fn without(mut self, mechanism: Mechanism) -> Self {
        self.bits &= !mechanism.bit();
        self
    }

    pub fn insert(&mut self, mechanism: Mechanism) {
        self.bits |= mechanism.bit();
    }

    pub fn contains(&self, mechanism: Mechanism) -> bool {
        self.bits & mechanism.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Mechanism> {
        let set = *self;
        Mechanism::ALL.into_iter().filter(move |m| set.contains(*m))
    }
}

impl Default for MechanismSet {
    fn default() -> Self {
        Self::empty().with(Mechanism::Dislocation).with(Mechanism::Dorn)
    }
}

impl FromIterator<Mechanism> for MechanismSet {
    fn from_iter<I: IntoIterator<Item = Mechanism>>(iter: I) -> Self {
        let mut set = Self::empty();
        for mechanism in iter {
            set.insert(mechanism);
        }
        set
    }
}

impl TryFrom<Vec<String>> for MechanismSet {
    type Error = RheologyError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::from_names(&names)
    }
}

impl From<MechanismSet> for Vec<String> {
    fn from(set: MechanismSet) -> Self {
        set.iter().map(|m| m.as_str().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip_and_rejection() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }

        let err = "shear".parse::<Mode>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, RheologyError::UnknownMode(ref m) if m == "shear"));
    }

    #[test]
    fn test_default_set_is_dislocation_and_dorn() {
        let set = MechanismSet::default();
        assert!(set.contains(Mechanism::Dislocation));
        assert!(set.contains(Mechanism::Dorn));
        assert!(!set.contains(Mechanism::Diffusion));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Mechanism::Dislocation, Mechanism::Dorn]);
    }

    #[test]
    fn test_from_names_accepts_all_three_keywords() {
        let set = MechanismSet::from_names(&["diffusion", "dorn", "dislocation"]).unwrap();
        assert_eq!(set, MechanismSet::all());

        let set = MechanismSet::from_names::<&str>(&[]).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_names_rejects_unknown_keyword() {
        let err = MechanismSet::from_names(&["dislocation", "peierls"]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, RheologyError::UnknownMechanism(ref m) if m == "peierls"));
    }

    #[test]
    fn test_with_and_without() {
        let set = MechanismSet::default().without(Mechanism::Dorn).with(Mechanism::Diffusion);
        assert!(set.contains(Mechanism::Dislocation));
        assert!(set.contains(Mechanism::Diffusion));
        assert!(!set.contains(Mechanism::Dorn));
    }

    #[test]
    fn test_set_serializes_as_keyword_list() {
        let json = serde_json::to_string(&MechanismSet::default()).unwrap();
        assert_eq!(json, r#"["dislocation","dorn"]"#);

        let parsed: MechanismSet = serde_json::from_str(r#"["diffusion"]"#).unwrap();
        assert_eq!(parsed, MechanismSet::empty().with(Mechanism::Diffusion));

        assert!(serde_json::from_str::<MechanismSet>(r#"["creep"]"#).is_err());
    }
}
