#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bundles;
pub mod config;
pub mod env;
pub mod render;
pub mod vars;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
