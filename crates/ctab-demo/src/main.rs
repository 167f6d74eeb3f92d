#![forbid(unsafe_code)]

//! `ctab` binary entry point.

use ctab_demo::{app, cli, logging};

fn main() {
    let opts = cli::Opts::parse();

    if let Some(path) = &opts.log
        && let Err(e) = logging::init(path)
    {
        eprintln!("Failed to open log file {}: {e}", path.display());
        std::process::exit(1);
    }

    if let Err(e) = app::run(&opts) {
        tracing::error!(error = %e, "fatal");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
