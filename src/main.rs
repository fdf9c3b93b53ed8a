use anyhow::Context;
use clap::Parser;
use marketing_ingest::config::cli::{Command, PersistArgs, StageArgs};
use marketing_ingest::handlers::{handle_dedupe, handle_persist, handle_validate_str};
use marketing_ingest::utils::logger;
use marketing_ingest::{CliConfig, IngestEngine, LocalStore, MarketingPersister};
use serde::Serialize;
use serde_json::Value;
use std::io::{Read, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match &config.command {
        Command::Validate(args) => {
            let response = handle_validate_str(&read_input(args)?);
            write_result(args, &response)?;
        }
        Command::Dedupe(args) => {
            let unique = handle_dedupe(read_payload(args)?)?;
            write_result(args, &unique)?;
        }
        Command::Persist(args) => {
            let persister = local_persister(args)?;
            let response = handle_persist(&persister, read_payload(&args.io)?).await;
            write_result(&args.io, &response)?;
            if response.status_code() != Some(200) {
                std::process::exit(1);
            }
        }
        Command::Run(args) => {
            let engine = IngestEngine::new(local_persister(args)?);
            let report = engine.run(read_payload(&args.io)?).await?;
            write_result(&args.io, &report)?;
        }
    }

    Ok(())
}

fn local_persister(args: &PersistArgs) -> anyhow::Result<MarketingPersister<LocalStore>> {
    let target = args.resolve_target()?;
    let store = LocalStore::new(&target.store_dir, &target.table_name);
    tracing::info!("Persisting to {}", store.path().display());
    Ok(MarketingPersister::new(store))
}

fn read_payload(args: &StageArgs) -> anyhow::Result<Value> {
    let content = read_input(args)?;
    serde_json::from_str(&content).context("input is not valid JSON")
}

fn read_input(args: &StageArgs) -> anyhow::Result<String> {
    if args.input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read records from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(&args.input).with_context(|| format!("failed to read {}", args.input))
    }
}

fn write_result<T: Serialize>(args: &StageArgs, result: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("failed to write {}", path))?;
            tracing::info!("Output saved to: {}", path);
        }
        None => writeln!(std::io::stdout(), "{}", json)?,
    }
    Ok(())
}
