mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "stn",
    version,
    about = "Inventory IDE template bundles and expand their placeholder macros"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// List logical bundle names discovered under templates_root
    List,

    /// Show a bundle's metadata and decoded options
    Show(ShowArgs),

    /// Expand placeholder tokens in a one-off string
    Expand(ExpandArgs),

    /// Render a bundle's files into an output directory
    New(NewArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Logical bundle name (e.g. "Source/Swift File")
    #[arg(long)]
    pub template: String,
}

#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Text containing ___TOKEN___ placeholders
    #[arg(long)]
    pub text: String,

    #[arg(long)]
    pub file_name: Option<String>,

    #[arg(long)]
    pub project_name: Option<String>,

    /// Option value as key=value (repeatable)
    #[arg(long = "opt", value_parser = parse_key_val)]
    pub opts: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Logical bundle name (e.g. "Source/Swift File")
    #[arg(long)]
    pub template: String,

    /// Directory to render the bundle's files into
    #[arg(long)]
    pub output: PathBuf,

    #[arg(long)]
    pub file_name: Option<String>,

    #[arg(long)]
    pub project_name: Option<String>,

    /// Option override as key=value (repeatable)
    #[arg(long = "opt", value_parser = parse_key_val)]
    pub opts: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
        }
        Commands::List => {
            cmd::list::run(cli.config.as_deref(), cli.profile.as_deref());
        }
        Commands::Show(args) => {
            cmd::show::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Expand(args) => {
            cmd::expand::run(&args);
        }
        Commands::New(args) => {
            cmd::new::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
    }
}
