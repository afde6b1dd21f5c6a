use std::path::Path;

use stencil_core::bundles::discover_bundles;
use stencil_core::config::loader::{default_config_path, ConfigLoader};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL stn list");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    crate::logging::init(&rc.logging);

    match discover_bundles(&rc.templates_root) {
        Ok(list) => {
            if list.is_empty() {
                println!("(no template bundles found)");
                return;
            }
            for b in &list {
                println!("{}", b.logical_name);
            }
            println!("-- {} bundles --", list.len());
        }
        Err(e) => {
            println!("FAIL stn list");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
