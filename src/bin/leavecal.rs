use anyhow::Result;
use chrono::Local;
use leavecal::cli::{self, CliArgs};
use leavecal::config::Config;
use leavecal::context::StandardContext;
use leavecal::logging;
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = match CliArgs::parse(&args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'leavecal --help' for usage.");
            std::process::exit(2);
        }
    };

    if parsed.help {
        cli::print_help("leavecal");
        return Ok(());
    }

    let ctx = StandardContext::new(parsed.root.clone());
    let config = match Config::load_or_default(&ctx) {
        Ok(c) => c,
        Err(e) => {
            // Syntax or permission problems are reported instead of silently
            // falling back to defaults.
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };
    logging::init(logging::level_for(parsed.verbosity, config.level_filter()));

    let today = parsed.today.unwrap_or_else(|| Local::now().date_naive());
    let output = cli::run(&parsed, &config, &ctx, today)?;
    print!("{}", output);
    Ok(())
}
