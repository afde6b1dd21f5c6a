use std::path::Path;

use stencil_core::bundles::BundleRepository;
use stencil_core::config::loader::{default_config_path, ConfigLoader};
use stencil_core::vars::TemplateOption;

use crate::ShowArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ShowArgs) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL stn show");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    crate::logging::init(&rc.logging);

    let repo = match BundleRepository::new(&rc.templates_root) {
        Ok(r) => r,
        Err(e) => {
            println!("FAIL stn show");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let loaded = match repo.get_by_name(&args.template) {
        Ok(b) => b,
        Err(e) => {
            println!("FAIL stn show");
            println!("{e}");
            std::process::exit(1);
        }
    };

    println!("template: {}", loaded.info.logical_name);
    println!("path: {}", loaded.info.path.display());
    if let Some(ref kind) = loaded.metadata.kind {
        println!("kind: {kind}");
    }
    if let Some(ref id) = loaded.metadata.identifier {
        println!("identifier: {id}");
    }
    if let Some(ref desc) = loaded.metadata.description {
        println!("description: {desc}");
    }
    if !loaded.metadata.platforms.is_empty() {
        println!("platforms: {}", loaded.metadata.platforms.join(", "));
    }

    println!("options:");
    if loaded.metadata.options.is_empty() {
        println!("  (none)");
    }
    for raw in &loaded.metadata.options {
        match TemplateOption::try_from(raw) {
            Ok(opt) => println!("  {} = {}", opt.identifier, opt.default),
            Err(reason) => {
                let label = raw
                    .identifier
                    .as_deref()
                    .or(raw.name.as_deref())
                    .unwrap_or("(unnamed)");
                println!("  {label} (skipped: {reason})");
            }
        }
    }

    println!("files:");
    if loaded.files.is_empty() {
        println!("  (none)");
    }
    for f in &loaded.files {
        println!("  {}", f.display());
    }
}
