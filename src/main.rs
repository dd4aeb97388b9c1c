use std::path::PathBuf;

use clap::Parser;

use git_semver::cli::{self, RunArgs};
use git_semver::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    version,
    about = "Derive a semantic version from the nearest git tag and the commits since"
)]
struct Args {
    #[arg(help = "Repository path (default: current directory)")]
    repo: Option<PathBuf>,

    #[arg(long, help = "Format pattern (e.g. x.y.z-p+m)")]
    format: Option<String>,

    #[arg(long, help = "Prefix of the version string, e.g. v (default: from tag)")]
    prefix: Option<String>,

    #[arg(long, value_name = "META", help = "Set build metadata")]
    set_meta: Option<String>,

    #[arg(long, help = "Exclude commit hash")]
    no_hash: bool,

    #[arg(long, help = "Exclude build metadata")]
    no_meta: bool,

    #[arg(long, help = "Exclude pre-release version")]
    no_pre: bool,

    #[arg(long, help = "Exclude patch version")]
    no_patch: bool,

    #[arg(long, help = "Exclude minor version")]
    no_minor: bool,

    #[arg(long, help = "Add release candidate")]
    release_candidate: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Log describe details to stderr")]
    verbose: bool,
}

impl From<Args> for RunArgs {
    fn from(args: Args) -> Self {
        RunArgs {
            repo: args.repo,
            config_path: args.config,
            format: args.format,
            prefix: args.prefix,
            set_meta: args.set_meta,
            no_hash: args.no_hash,
            no_meta: args.no_meta,
            no_pre: args.no_pre,
            no_patch: args.no_patch,
            no_minor: args.no_minor,
            release_candidate: args.release_candidate,
        }
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    match cli::run(&RunArgs::from(args)) {
        Ok(version) => ui::display_version(&version),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
