extern crate clap;
extern crate env_logger;
extern crate neutron_conv;
extern crate serde_json;
extern crate tokio;

use std::process;
use serde_json::{Map, Value};
use neutron_conv::conf::Conf;
use neutron_conv::quantity::Quantity;
use neutron_conv::{handler, server};

fn init_logger(filter: &str) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(filter),
    ).init();
}

fn fail<E: std::fmt::Display>(err: E) -> ! {
    eprintln!("error: {}", err);
    process::exit(1)
}

fn run_convert(matches: &clap::ArgMatches) {
    init_logger("warn");
    let mut input = Map::new();
    for &q in &Quantity::ALL {
        if let Some(s) = matches.value_of(q.field()) {
            let value: f64 = s.parse().unwrap_or_else(|_| {
                fail(format!("{} is not a number: {}", q, s))
            });
            input.insert(q.field().into(), Value::from(value));
        }
    }
    match handler::full_conversion(&input) {
        Ok(neutron) => match serde_json::to_string(&neutron) {
            Ok(json) => println!("{}", json),
            Err(err) => fail(err),
        },
        Err(err) => fail(err),
    }
}

fn run_serve(matches: &clap::ArgMatches) {
    let mut conf = match matches.value_of_os("conf") {
        Some(path) => Conf::load(path.as_ref()).unwrap_or_else(|e| fail(e)),
        None => Conf::default(),
    };
    if let Some(host) = matches.value_of("host") {
        conf.host = host.into();
    }
    if let Some(port) = matches.value_of("port") {
        conf.port = port.parse().unwrap_or_else(|e| fail(e));
    }
    init_logger(&conf.log_filter);
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| fail(e));
    if let Err(err) = runtime.block_on(server::serve(&conf)) {
        fail(err);
    }
}

fn main() {
    let matches = clap::App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .setting(clap::AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            clap::SubCommand::with_name("convert")
                .about("Convert one quantity of a free neutron into the others")
                .args_from_usage("--energy=[energy] 'Kinetic energy in meV'")
                .args_from_usage("--velocity=[velocity] 'Velocity in m/s'")
                .args_from_usage("--wavelength=[wavelength] 'De Broglie wavelength in Å'"))
        .subcommand(
            clap::SubCommand::with_name("serve")
                .about("Serve conversions over HTTP")
                .args_from_usage("--conf=[conf] 'YAML configuration file'")
                .args_from_usage("--host=[host] 'Address to bind'")
                .args_from_usage("--port=[port] 'Port to listen on'"))
        .get_matches();

    match matches.subcommand() {
        ("convert", Some(m)) => run_convert(m),
        ("serve", Some(m)) => run_serve(m),
        _ => unreachable!(),
    }
}
