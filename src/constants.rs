// Physical constants
pub const GRAVITY_M_S2: f64 = 9.81;
pub const GAS_CONSTANT_J_MOL_K: f64 = 8.314472; // m2 kg / s2 / K / mol
pub const TO_KELVIN: f64 = 273.15;

pub const PA_PER_GPA: f64 = 1.0e9;
pub const PA_PER_MPA: f64 = 1.0e6;
pub const M_PER_KM: f64 = 1000.0;

// Frictional stress above which dislocation creep replaces Dorn's law as the creep candidate
pub const DORN_SWITCH_STRESS_PA: f64 = 200.0 * PA_PER_MPA;

// default envelope settings:
pub const DEFAULT_STRAIN_RATE: f64 = 1.0e-16; // 1/s
pub const DEFAULT_PROFILE_POINTS: usize = 1000;
pub const DEFAULT_PROFILE_DEPTH_KM: f64 = 100.0;

// Below this many depth samples the profile is evaluated on the calling thread
pub const PARALLEL_PROFILE_THRESHOLD: usize = 256;
