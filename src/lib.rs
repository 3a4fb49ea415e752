extern crate axum;
extern crate fnv;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
extern crate serde_yaml;
extern crate tokio;

#[macro_use]
mod macros;

pub mod conf;
pub mod convert;
pub mod error;
pub mod handler;
pub mod phys_consts;
pub mod quantity;
pub mod server;
pub mod utils;
