use std::fs;
use std::path::Path;
use std::sync::Arc;

use stencil_core::bundles::{BundleRepoError, BundleRepository, LoadedBundle};
use stencil_core::config::loader::{default_config_path, ConfigLoader};
use stencil_core::config::types::ResolvedConfig;
use stencil_core::env::HostEnvironment;
use stencil_core::render::{render_file_name, render_str};
use stencil_core::vars::{ContextBuilder, VariableContext};
use tracing::debug;

use crate::NewArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &NewArgs) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL stn new");
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
            println!("FAIL stn new");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let loaded = match repo.get_by_name(&args.template) {
        Ok(b) => b,
        Err(e) => match e {
            BundleRepoError::NotFound(name) => {
                eprintln!("Template bundle not found: {name}");
                std::process::exit(1);
            }
            other => {
                eprintln!("Failed to load template bundle: {other}");
                std::process::exit(1);
            }
        },
    };

    let mut ctx = build_context(&rc, &loaded, args);
    let written = render_into(&loaded, &mut ctx, &args.output);

    println!("OK   stn new");
    println!("template: {}", loaded.info.logical_name);
    println!("output: {}", args.output.display());
    for path in &written {
        println!("  {path}");
    }
}

fn build_context(
    rc: &ResolvedConfig,
    loaded: &LoadedBundle,
    args: &NewArgs,
) -> VariableContext {
    let mut builder =
        ContextBuilder::new().raw_options(loaded.metadata.options.clone());

    if let Some(ref name) = args.file_name {
        builder = builder.file_name(name.as_str());
    }
    if let Some(name) = args.project_name.as_ref().or(rc.project_name.as_ref()) {
        builder = builder.project_name(name.as_str());
    }
    for (key, value) in &args.opts {
        builder = builder.option(key.as_str(), value.as_str());
    }

    builder.build(Arc::new(HostEnvironment::new()))
}

fn render_into(
    loaded: &LoadedBundle,
    ctx: &mut VariableContext,
    output: &Path,
) -> Vec<String> {
    let mut written = Vec::new();

    for rel in &loaded.files {
        let src_path = loaded.info.path.join(rel);
        let src = match fs::read_to_string(&src_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to read {}: {e}", src_path.display());
                std::process::exit(1);
            }
        };

        let rendered_rel =
            render_file_name(&rel.to_string_lossy(), ctx);
        let dest = output.join(&rendered_rel);
        debug!(src = %src_path.display(), dest = %dest.display(), "rendering file");

        if let Some(parent) = dest.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Failed to create {}: {e}", parent.display());
                std::process::exit(1);
            }
        }

        let body = render_str(&src, ctx);
        if let Err(e) = fs::write(&dest, body) {
            eprintln!("Failed to write {}: {e}", dest.display());
            std::process::exit(1);
        }

        written.push(rendered_rel);
    }

    written
}
