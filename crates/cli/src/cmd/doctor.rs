use std::path::Path;

use stencil_core::config::loader::{default_config_path, ConfigLoader};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc.logging);
            println!("OK   stn doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("templates_root: {}", rc.templates_root.display());
            if let Some(ref name) = rc.project_name {
                println!("project_name: {name}");
            }
            println!("logging.level: {}", rc.logging.level);
        }
        Err(e) => {
            println!("FAIL stn doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
