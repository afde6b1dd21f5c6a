use std::sync::Arc;

use stencil_core::config::types::LoggingConfig;
use stencil_core::env::HostEnvironment;
use stencil_core::render::render_str;
use stencil_core::vars::ContextBuilder;

use crate::ExpandArgs;

pub fn run(args: &ExpandArgs) {
    crate::logging::init(&LoggingConfig::default());

    let mut builder = ContextBuilder::new();
    if let Some(ref name) = args.file_name {
        builder = builder.file_name(name.as_str());
    }
    if let Some(ref name) = args.project_name {
        builder = builder.project_name(name.as_str());
    }
    for (key, value) in &args.opts {
        builder = builder.option(key.as_str(), value.as_str());
    }

    let mut ctx = builder.build(Arc::new(HostEnvironment::new()));
    println!("{}", render_str(&args.text, &mut ctx));
}
