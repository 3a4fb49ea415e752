//! Errors reported by the request handler.

quick_error! {
    /// Each variant maps to an HTTP-like status via `Error::status`.
    #[derive(Clone, Debug, PartialEq)]
    pub enum Error {
        /// A required quantity was not supplied.
        MissingField(field: &'static str) {
            display("Missing {} parameter", field)
        }
        /// The quantity lies outside its physical domain.
        InvalidDomain(message: &'static str) {
            display("{}", message)
        }
        /// Full conversion needs exactly one quantity.
        AmbiguousInput {
            display("Provide exactly one parameter: energy, velocity, or wavelength")
        }
        /// Malformed input or a non-finite result.
        Unexpected(message: String) {
            display("{}", message)
            from(err: serde_json::Error) -> (err.to_string())
        }
        NotFound {
            display("Endpoint not found")
        }
        MethodNotAllowed {
            display("Method not allowed")
        }
    }
}

impl Error {
    pub fn status(&self) -> u16 {
        match *self {
            Error::MissingField(_)
                | Error::InvalidDomain(_)
                | Error::AmbiguousInput => 400,
            Error::NotFound => 404,
            Error::MethodNotAllowed => 405,
            Error::Unexpected(_) => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status() < 500
    }
}
