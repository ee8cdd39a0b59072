use clap::{ArgGroup, Parser};
use log::info;
use maprebase_core::{run, PrefixSource, RunOptions};

#[derive(Parser)]
#[command(
    version,
    about = "Rewrites source path prefixes inside sourcemap files to package-relative paths",
    group(ArgGroup::new("prefix_source").required(true).args(["prefix", "auto"]))
)]
struct Cli {
    /// Globs of sourcemaps to process
    #[arg(long, required = true, num_args = 1..)]
    include: Vec<String>,

    /// Globs of sourcemaps to exclude
    #[arg(long, num_args = 1..)]
    exclude: Vec<String>,

    /// Sets the source path prefix
    #[arg(long, short = 'p')]
    prefix: Option<String>,

    /// Auto detects the source path prefix
    #[arg(long, short = 'a')]
    auto: bool,

    /// Does not write changes to files but prints to stdout
    #[arg(long)]
    dryrun: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: cannot determine working directory: {e}");
            std::process::exit(1);
        }
    };

    // The arg group guarantees exactly one of --prefix / --auto is set.
    let prefix = match cli.prefix {
        Some(p) => PrefixSource::Explicit(p),
        None => PrefixSource::Auto,
    };

    let opts = RunOptions {
        root,
        includes: cli.include,
        excludes: cli.exclude,
        prefix,
        dry_run: cli.dryrun,
    };

    match run(&opts) {
        Ok(summary) => info!(
            "rewrote {} of {} sources across {} files with prefix '{}' (package '{}')",
            summary.rewritten, summary.sources, summary.files, summary.prefix, summary.package
        ),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
