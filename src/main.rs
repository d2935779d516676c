mod analysis;
mod report;
mod settings;

use analysis::run_analysis;
use anyhow::Result;
use clap::Parser;
use report::{render_summary, render_sweep_csv};
use settings::CliArgs;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Defaults first, then the settings file, then flags. Nothing is kept
    // between runs; every evaluation starts from these values.
    let settings = args.resolve()?;
    let summary = run_analysis(&settings)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print!("{}", render_summary(&summary));
    if args.sweep {
        println!();
        print!("{}", render_sweep_csv(&summary.curve));
    }

    Ok(())
}
