//! Server configuration.
use std::{io, path};
use std::fs::File;

quick_error! {
    /// Error type for `Conf::load`.
    #[derive(Debug)]
    pub enum Error {
        Io(err: io::Error) {
            from()
            source(err)
            display("cannot read configuration: {}", err)
        }
        Yaml(err: serde_yaml::Error) {
            from()
            source(err)
            display("invalid configuration: {}", err)
        }
    }
}

/// Can be constructed using `Conf::default()`, loaded from a YAML file, or
/// built directly.  Keys missing from the file keep their default values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    pub host: String,
    pub port: u16,
    /// Filter passed to `env_logger` unless `RUST_LOG` is set.
    pub log_filter: String,
}

/// `{ host: "0.0.0.0", port: 5000, log_filter: "info" }`
impl Default for Conf {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            log_filter: "info".into(),
        }
    }
}

impl Conf {
    pub fn load(path: &path::Path) -> Result<Self, Error> {
        Ok(serde_yaml::from_reader(File::open(path)?)?)
    }

    pub fn parse(s: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
