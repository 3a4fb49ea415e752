//! Request handling independent of the transport.
//!
//! A request is a method, a path, and a JSON body.  `handle` routes it,
//! validates the input against the domain rules of
//! [`Quantity`](../quantity/enum.Quantity.html), runs the conversion, and
//! produces a status together with a JSON body.  Errors always have the
//! shape `{"error": "<message>"}`.
//!
//! | path                              | input      | output                      |
//! |-----------------------------------|------------|-----------------------------|
//! | `/health` (GET)                   |            | `status`                    |
//! | `/convert/energy-to-velocity`     | energy     | energy_meV, velocity_ms     |
//! | `/convert/velocity-to-energy`     | velocity   | velocity_ms, energy_meV     |
//! | `/convert/velocity-to-wavelength` | velocity   | velocity_ms, wavelength_angstrom |
//! | `/convert/wavelength-to-velocity` | wavelength | wavelength_angstrom, velocity_ms |
//! | `/convert/energy-to-wavelength`   | energy     | energy_meV, wavelength_angstrom |
//! | `/convert/wavelength-to-energy`   | wavelength | wavelength_angstrom, energy_meV |
//! | `/convert/full`                   | exactly one of the three | all three   |
//!
//! All `/convert` routes take POST.

use fnv::FnvHashMap;
use serde_json::{Map, Value};
use super::convert::{self, Neutron};
use super::error::Error;
use super::quantity::Quantity;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Health,
    Convert { from: Quantity, to: Quantity },
    Full,
}

impl Route {
    pub fn method(self) -> &'static str {
        match self {
            Route::Health => "GET",
            _ => "POST",
        }
    }
}

lazy_static! {
    pub static ref ROUTES: FnvHashMap<&'static str, Route> = {
        use self::Quantity::*;
        let mut routes = FnvHashMap::default();
        routes.insert("/health", Route::Health);
        routes.insert("/convert/full", Route::Full);
        for &(path, from, to) in &[
            ("/convert/energy-to-velocity", Energy, Velocity),
            ("/convert/velocity-to-energy", Velocity, Energy),
            ("/convert/velocity-to-wavelength", Velocity, Wavelength),
            ("/convert/wavelength-to-velocity", Wavelength, Velocity),
            ("/convert/energy-to-wavelength", Energy, Wavelength),
            ("/convert/wavelength-to-energy", Wavelength, Energy),
        ] {
            routes.insert(path, Route::Convert { from, to });
        }
        routes
    };
}

#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn error(err: &Error) -> Self {
        Self {
            status: err.status(),
            body: json!({ "error": err.to_string() }),
        }
    }
}

/// Handle one request.  Never fails: errors become error responses.
pub fn handle(method: &str, path: &str, body: &[u8]) -> Response {
    debug!("{} {}", method, path);
    match dispatch(method, path, body) {
        Ok(value) => Response::ok(value),
        Err(err) => {
            if err.is_client_error() {
                debug!("{} {}: {} ({})", method, path, err, err.status());
            } else {
                warn!("{} {}: {} ({})", method, path, err, err.status());
            }
            Response::error(&err)
        }
    }
}

pub fn dispatch(method: &str, path: &str, body: &[u8]) -> Result<Value, Error> {
    let route = *ROUTES.get(path).ok_or(Error::NotFound)?;
    if method != route.method() {
        return Err(Error::MethodNotAllowed);
    }
    match route {
        Route::Health => Ok(json!({ "status": "healthy" })),
        Route::Convert { from, to } => {
            let input = parse_body(body)?;
            Ok(Value::Object(convert_pair(from, to, &input)?))
        }
        Route::Full => {
            let input = parse_body(body)?;
            Ok(serde_json::to_value(full_conversion(&input)?)?)
        }
    }
}

pub fn parse_body(body: &[u8]) -> Result<Map<String, Value>, Error> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::Unexpected(
            format!("expected a JSON object, got {}", other),
        )),
    }
}

/// Returns `true` if the field is present and not `null`.
fn is_supplied(input: &Map<String, Value>, quantity: Quantity) -> bool {
    input.get(quantity.field()).map(|v| !v.is_null()).unwrap_or(false)
}

/// Read a quantity from the input, treating `null` as absent.  Negative zero
/// is read as zero.
pub fn get_quantity(
    input: &Map<String, Value>,
    quantity: Quantity,
) -> Result<Option<f64>, Error>
{
    match input.get(quantity.field()) {
        None | Some(&Value::Null) => Ok(None),
        Some(v) => v.as_f64().map(|x| Some(x + 0.0)).ok_or_else(|| Error::Unexpected(
            format!("{} must be a number, got {}", quantity, v),
        )),
    }
}

fn ensure_finite(value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::Unexpected(
            format!("conversion produced a non-finite result: {}", value),
        ))
    }
}

/// Convert the single quantity `from` into `to`.  The result contains both,
/// keyed by unit.
pub fn convert_pair(
    from: Quantity,
    to: Quantity,
    input: &Map<String, Value>,
) -> Result<Map<String, Value>, Error>
{
    let value = get_quantity(input, from)?
        .ok_or(Error::MissingField(from.field()))?;
    from.check(value, to == Quantity::Wavelength)?;
    let result = ensure_finite(convert::convert(from, to, value))?;
    let mut output = Map::new();
    output.insert(from.key().into(), value.into());
    output.insert(to.key().into(), result.into());
    Ok(output)
}

/// Derive all three quantities from exactly one supplied quantity.
pub fn full_conversion(input: &Map<String, Value>) -> Result<Neutron, Error> {
    let supplied: Vec<Quantity> = Quantity::ALL.iter()
        .cloned()
        .filter(|&q| is_supplied(input, q))
        .collect();
    if supplied.len() != 1 {
        return Err(Error::AmbiguousInput);
    }
    let quantity = supplied[0];
    let value = get_quantity(input, quantity)?
        .ok_or(Error::MissingField(quantity.field()))?;
    quantity.check(value, quantity != Quantity::Wavelength)?;
    let neutron = Neutron::from_quantity(quantity, value);
    if !neutron.is_finite() {
        return Err(Error::Unexpected(
            format!("conversion produced a non-finite result: {:?}", neutron),
        ));
    }
    Ok(neutron)
}
