use super::args::Cli;
use std::sync::Arc;
use triage_core::config::{BuildContext, LlmSettings};
use triage_core::engine::pipeline::TriagePipeline;
use triage_core::providers::llm::ollama::OllamaClient;
use triage_core::report::console;
use triage_core::storage::Store;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const FAILURE: i32 = 1;
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    let Some(log_file) = cli.log_file.clone() else {
        eprintln!("Usage: triage <LOG_FILE>");
        return Ok(exit_codes::FAILURE);
    };

    // Checked before opening anything so a bad invocation has no side effects.
    if !log_file.exists() {
        eprintln!("ERROR: log file not found: {}", log_file.display());
        return Ok(exit_codes::FAILURE);
    }

    ensure_parent_dir(&cli.db)?;
    let store = Store::open(&cli.db)?;
    store.init_schema()?;

    let settings = LlmSettings {
        base_url: cli.base_url.clone(),
        model: cli.model.clone(),
        temperature: cli.temperature,
        timeout_secs: cli.timeout_secs,
    };
    let client = Arc::new(OllamaClient::new(&settings)?);

    let mut pipeline = TriagePipeline::new(store, client);
    pipeline.window = cli.window;

    let ctx = BuildContext::from_env();

    eprintln!("⏳ asking {} for analysis...", cli.model);
    match pipeline.run(&log_file, &ctx).await {
        Ok(outcome) => {
            console::print_report(&outcome);
            eprintln!(
                "✅ saved failure record: job={} build={}",
                outcome.record.job_name, outcome.record.build_number
            );
            Ok(exit_codes::OK)
        }
        Err(e) => {
            eprintln!("ERROR: failed to analyze build log");
            eprintln!("{e:?}");
            Ok(exit_codes::FAILURE)
        }
    }
}

fn ensure_parent_dir(path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
