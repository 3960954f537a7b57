use clap::Parser;
use roster::core::script::{demo_removal_steps, demo_setup_steps};
use roster::utils::{logger, validation::Validate};
use roster::{run_script, CliConfig, OrderedRecordList, ScriptConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting roster CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut list = OrderedRecordList::new();

    match &config.script {
        Some(path) => {
            let script = match ScriptConfig::from_file(path) {
                Ok(script) => script,
                Err(e) => {
                    tracing::error!("Failed to load script '{}': {}", path, e);
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = script.validate() {
                tracing::error!("Script '{}' failed validation: {}", script.script.name, e);
                eprintln!("{}", e);
                std::process::exit(1);
            }

            tracing::info!("Running script '{}'", script.script.name);
            let report = run_script(&mut list, &script.steps);
            if report.skipped > 0 {
                tracing::warn!("{} step(s) had no matching record", report.skipped);
            }
            print_roster(&list, &config.format)?;
        }
        None => {
            // Built-in demo: assemble the fixed roster, show it, remove one
            // entry, show it again.
            run_script(&mut list, &demo_setup_steps());
            print_roster(&list, &config.format)?;

            run_script(&mut list, &demo_removal_steps());
            println!();
            print_roster(&list, &config.format)?;
        }
    }

    Ok(())
}

fn print_roster(list: &OrderedRecordList, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => {
            for record in list {
                println!("{}", serde_json::to_string(record)?);
            }
        }
        _ => {
            print!("{}", list);
        }
    }
    Ok(())
}
