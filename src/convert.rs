//! Conversions between the kinetic energy, velocity, and de Broglie
//! wavelength of a free neutron.
//!
//! Units: energy in meV, velocity in m/s, wavelength in Å.  Kinetic energy
//! is classical (`½ m v²`).
//!
//! Every conversion between energy and wavelength goes through velocity, so
//! the two primitives `energy_to_velocity` / `velocity_to_energy` and
//! `velocity_to_wavelength` / `wavelength_to_velocity` are the only places
//! where the physics lives.
//!
//! None of these functions validate their arguments.  Out-of-domain inputs
//! give whatever IEEE arithmetic gives: a negative energy yields `NaN`, and a
//! zero velocity or wavelength yields an infinite result.  See
//! [`Quantity::check`](../quantity/enum.Quantity.html#method.check) for the
//! domain rules.

use super::phys_consts::{ANGSTROM_M, MEV_J, M_NEUTRON_KG, PLANCK_JS};
use super::quantity::Quantity;

/// Velocity (m/s) of a neutron with kinetic energy `energy_mev` (meV).
#[inline]
pub fn energy_to_velocity(energy_mev: f64) -> f64 {
    let energy_j = energy_mev * MEV_J;
    (2.0 * energy_j / M_NEUTRON_KG).sqrt()
}

/// Kinetic energy (meV) of a neutron moving at `velocity_ms` (m/s).
#[inline]
pub fn velocity_to_energy(velocity_ms: f64) -> f64 {
    let energy_j = 0.5 * M_NEUTRON_KG * velocity_ms.powi(2);
    energy_j / MEV_J
}

/// De Broglie wavelength (Å) of a neutron moving at `velocity_ms` (m/s).
#[inline]
pub fn velocity_to_wavelength(velocity_ms: f64) -> f64 {
    let wavelength_m = PLANCK_JS / (M_NEUTRON_KG * velocity_ms);
    wavelength_m / ANGSTROM_M
}

/// Velocity (m/s) of a neutron with de Broglie wavelength
/// `wavelength_angstrom` (Å).
#[inline]
pub fn wavelength_to_velocity(wavelength_angstrom: f64) -> f64 {
    let wavelength_m = wavelength_angstrom * ANGSTROM_M;
    PLANCK_JS / (M_NEUTRON_KG * wavelength_m)
}

/// De Broglie wavelength (Å) of a neutron with kinetic energy `energy_mev`
/// (meV).  Infinite at zero energy.
#[inline]
pub fn energy_to_wavelength(energy_mev: f64) -> f64 {
    velocity_to_wavelength(energy_to_velocity(energy_mev))
}

/// Kinetic energy (meV) of a neutron with de Broglie wavelength
/// `wavelength_angstrom` (Å).
#[inline]
pub fn wavelength_to_energy(wavelength_angstrom: f64) -> f64 {
    velocity_to_energy(wavelength_to_velocity(wavelength_angstrom))
}

/// Convert `value` of quantity `from` into quantity `to`.
pub fn convert(from: Quantity, to: Quantity, value: f64) -> f64 {
    use self::Quantity::*;
    match (from, to) {
        (Energy, Velocity) => energy_to_velocity(value),
        (Velocity, Energy) => velocity_to_energy(value),
        (Velocity, Wavelength) => velocity_to_wavelength(value),
        (Wavelength, Velocity) => wavelength_to_velocity(value),
        (Energy, Wavelength) => energy_to_wavelength(value),
        (Wavelength, Energy) => wavelength_to_energy(value),
        (Energy, Energy)
            | (Velocity, Velocity)
            | (Wavelength, Wavelength) => value,
    }
}

/// A neutron described by all three quantities at once.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Neutron {
    #[serde(rename = "energy_meV")]
    pub energy_mev: f64,
    pub velocity_ms: f64,
    pub wavelength_angstrom: f64,
}

impl Neutron {
    pub fn from_energy(energy_mev: f64) -> Self {
        Self {
            energy_mev,
            velocity_ms: energy_to_velocity(energy_mev),
            wavelength_angstrom: energy_to_wavelength(energy_mev),
        }
    }

    pub fn from_velocity(velocity_ms: f64) -> Self {
        Self {
            energy_mev: velocity_to_energy(velocity_ms),
            velocity_ms,
            wavelength_angstrom: velocity_to_wavelength(velocity_ms),
        }
    }

    pub fn from_wavelength(wavelength_angstrom: f64) -> Self {
        Self {
            energy_mev: wavelength_to_energy(wavelength_angstrom),
            velocity_ms: wavelength_to_velocity(wavelength_angstrom),
            wavelength_angstrom,
        }
    }

    pub fn from_quantity(quantity: Quantity, value: f64) -> Self {
        match quantity {
            Quantity::Energy => Self::from_energy(value),
            Quantity::Velocity => Self::from_velocity(value),
            Quantity::Wavelength => Self::from_wavelength(value),
        }
    }

    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Energy => self.energy_mev,
            Quantity::Velocity => self.velocity_ms,
            Quantity::Wavelength => self.wavelength_angstrom,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.energy_mev.is_finite()
            && self.velocity_ms.is_finite()
            && self.wavelength_angstrom.is_finite()
    }
}
