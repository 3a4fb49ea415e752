//! Physical constants.
//!
//! All values are exact or CODATA 2018 in SI units.

/// Planck constant h /(J s)
pub const PLANCK_JS: f64 = 6.62607015e-34;

/// Mass of neutron /(kg)
pub const M_NEUTRON_KG: f64 = 1.67492749804e-27;

/// Elementary charge, i.e. one electronvolt /(J)
pub const EV_J: f64 = 1.602176634e-19;

/// One millielectronvolt /(J), i.e. `EV_J` scaled by 10⁻³
pub const MEV_J: f64 = 1.602176634e-22;

/// One ångström /(m)
pub const ANGSTROM_M: f64 = 1e-10;
