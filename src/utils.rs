/// Error tolerance for comparing floating-point numbers.
///
/// Two numbers `x` and `y` are considered equal if
/// `|x − y| ≤ abserr + relerr × max(|x|, |y|)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Toler {
    pub relerr: f64,
    pub abserr: f64,
}

/// `{ relerr: 1e-8, abserr: 1e-8 }`
impl Default for Toler {
    fn default() -> Self {
        Self { relerr: 1e-8, abserr: 1e-8 }
    }
}

impl Toler {
    pub fn is_eq(&self, x: f64, y: f64) -> bool {
        (x - y).abs() <= self.abserr + self.relerr * x.abs().max(y.abs())
    }
}
