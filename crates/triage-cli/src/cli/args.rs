use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "triage",
    version,
    about = "AI-assisted triage for Jenkins build-failure logs"
)]
pub struct Cli {
    /// Path to the build log to analyze
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value = "triage.db", env = "TRIAGE_DB")]
    pub db: PathBuf,

    /// Completion model identifier
    #[arg(long, default_value = "gemma3:1b", env = "TRIAGE_MODEL")]
    pub model: String,

    /// Completion service base URL
    #[arg(long, default_value = "http://localhost:11434", env = "TRIAGE_OLLAMA_URL")]
    pub base_url: String,

    /// Decoding temperature for the completion call
    #[arg(long, default_value_t = 0.0)]
    pub temperature: f32,

    /// Request timeout for the completion call, in seconds
    #[arg(long, default_value_t = 120, env = "TRIAGE_LLM_TIMEOUT_SECS")]
    pub timeout_secs: u64,

    /// Trailing log window sent to the model, in characters
    #[arg(long, default_value_t = triage_core::loader::DEFAULT_LOG_WINDOW)]
    pub window: usize,
}
