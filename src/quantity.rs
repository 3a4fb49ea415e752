//! The three physical quantities and the domain each one must lie in.
use std::fmt;
use super::error::Error;

/// A physical quantity describing a free neutron.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quantity {
    /// Kinetic energy in meV
    Energy,
    /// Velocity in m/s
    Velocity,
    /// De Broglie wavelength in Å
    Wavelength,
}

impl Quantity {
    pub const ALL: [Quantity; 3] =
        [Quantity::Energy, Quantity::Velocity, Quantity::Wavelength];

    /// Name of the input field.
    pub fn field(self) -> &'static str {
        match self {
            Quantity::Energy => "energy",
            Quantity::Velocity => "velocity",
            Quantity::Wavelength => "wavelength",
        }
    }

    /// Name of the output field, tagged with its unit.
    pub fn key(self) -> &'static str {
        match self {
            Quantity::Energy => "energy_meV",
            Quantity::Velocity => "velocity_ms",
            Quantity::Wavelength => "wavelength_angstrom",
        }
    }

    /// Check that `value` is physically meaningful for this quantity.
    ///
    /// Energy and velocity must be non-negative, and wavelength must be
    /// positive.  If a wavelength is to be derived from `value`
    /// (`wavelength_needed`), energy and velocity must be strictly positive
    /// too, as zero speed has no finite wavelength.
    pub fn check(self, value: f64, wavelength_needed: bool) -> Result<(), Error> {
        let message = match self {
            Quantity::Energy if value < 0.0 =>
                "Energy must be non-negative",
            Quantity::Energy if wavelength_needed && value == 0.0 =>
                "Energy must be positive",
            Quantity::Velocity if wavelength_needed && value <= 0.0 =>
                "Velocity must be positive",
            Quantity::Velocity if value < 0.0 =>
                "Velocity must be non-negative",
            Quantity::Wavelength if value <= 0.0 =>
                "Wavelength must be positive",
            _ => return Ok(()),
        };
        Err(Error::InvalidDomain(message))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.field())
    }
}
