//! Property-based tests for the conversions.

extern crate neutron_conv;
extern crate proptest;
#[macro_use]
extern crate serde_json;

use neutron_conv::convert;
use neutron_conv::handler;
use neutron_conv::utils::Toler;
use proptest::prelude::*;

const TOLER: Toler = Toler { relerr: 1e-6, abserr: 0.0 };

proptest! {
    /// Energy survives a trip through velocity.
    #[test]
    fn energy_velocity_roundtrip(e in 0.0f64..1e9) {
        let back = convert::velocity_to_energy(convert::energy_to_velocity(e));
        prop_assert!(TOLER.is_eq(back, e), "{} -> {}", e, back);
    }

    /// Velocity survives a trip through wavelength.
    #[test]
    fn velocity_wavelength_roundtrip(v in 1e-3f64..1e8) {
        let back = convert::wavelength_to_velocity(convert::velocity_to_wavelength(v));
        prop_assert!(TOLER.is_eq(back, v), "{} -> {}", v, back);
    }

    /// Wavelength survives a trip through energy.
    #[test]
    fn wavelength_energy_roundtrip(l in 1e-4f64..1e4) {
        let back = convert::energy_to_wavelength(convert::wavelength_to_energy(l));
        prop_assert!(TOLER.is_eq(back, l), "{} -> {}", l, back);
    }

    /// Faster neutrons carry more energy.
    #[test]
    fn energy_to_velocity_increasing(e in 0.0f64..1e9, de in 1e-3f64..1e3) {
        prop_assert!(convert::energy_to_velocity(e + de)
                     > convert::energy_to_velocity(e));
    }

    /// Faster neutrons have shorter wavelengths.
    #[test]
    fn velocity_to_wavelength_decreasing(v in 1e-3f64..1e8, dv in 1e-3f64..1e3) {
        prop_assert!(convert::velocity_to_wavelength(v + dv)
                     < convert::velocity_to_wavelength(v));
    }

    /// Doubling the velocity halves the wavelength.
    #[test]
    fn velocity_wavelength_inverse(v in 1e-3f64..1e8) {
        let l = convert::velocity_to_wavelength(v);
        let l2 = convert::velocity_to_wavelength(2.0 * v);
        let toler = Toler { relerr: 1e-12, abserr: 0.0 };
        prop_assert!(toler.is_eq(l2, l / 2.0), "{} != {} / 2", l2, l);
    }

    /// Negative energies are rejected by every route accepting energy.
    #[test]
    fn negative_energy_rejected(e in -1e9f64..-1e-9) {
        for path in &["/convert/energy-to-velocity",
                      "/convert/energy-to-wavelength",
                      "/convert/full"] {
            let body = json!({ "energy": e }).to_string();
            let response = handler::handle("POST", path, body.as_bytes());
            prop_assert_eq!(response.status, 400);
        }
    }

    /// Full conversion from energy agrees with the pairwise conversions.
    #[test]
    fn full_matches_pairwise(e in 1e-6f64..1e6) {
        let body = json!({ "energy": e }).to_string();
        let response = handler::handle("POST", "/convert/full", body.as_bytes());
        prop_assert_eq!(response.status, 200);
        prop_assert_eq!(response.body["velocity_ms"].as_f64(),
                        Some(convert::energy_to_velocity(e)));
        prop_assert_eq!(response.body["wavelength_angstrom"].as_f64(),
                        Some(convert::energy_to_wavelength(e)));
    }
}
