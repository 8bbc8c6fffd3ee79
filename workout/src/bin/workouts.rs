use std::io::Write;

use workout::{Package, Training, default_packages};

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Packages in `CODE:v1,v2,...` form, e.g. `RUN:15000,1,75`. Runs the reference packages when empty
    #[arg(required = false)]
    pub packages: Vec<Package>,
    /// Print every summary as a JSON line
    #[arg(short, long, default_value_t = false, required = false)]
    pub json: bool,
    /// Only log errors
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Log every dispatched package
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (_, true) => "debug",
        _ => "warn",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("WORKOUT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing subscriber. Reason: {e}"))?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        packages,
        json,
        quiet,
        verbose,
    } = <Args as clap::Parser>::parse();

    init_tracing(quiet, verbose)?;

    let packages = match packages.is_empty() {
        true => default_packages(),
        false => packages,
    };

    let io = std::io::stdout();
    let mut io = io.lock();

    for package in &packages {
        let info = package.read()?.show_training_info().inspect_err(|e| {
            tracing::warn!(%package, error = %e, "Package can't be summarized");
        })?;

        match json {
            true => writeln!(io, "{}", serde_json::to_string(&info)?)?,
            false => writeln!(io, "{}", info.get_message())?,
        }
    }

    tracing::debug!(total = packages.len(), "Done");

    Ok(())
}
