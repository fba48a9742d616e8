use std::env;

/// Build metadata the CI system exports to child processes.
#[derive(Clone, Debug)]
pub struct BuildContext {
    pub job_name: String,
    pub build_number: i64,
    pub node_name: String,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self {
            job_name: "demo-job-1".to_string(),
            build_number: 42,
            node_name: "built-in".to_string(),
        }
    }
}

impl BuildContext {
    pub fn from_env() -> Self {
        let mut ctx = Self::default();
        if let Ok(v) = env::var("JOB_NAME") {
            if !v.is_empty() {
                ctx.job_name = v;
            }
        }
        if let Ok(v) = env::var("BUILD_NUMBER") {
            // Non-numeric or negative values keep the default.
            if let Ok(n) = v.parse::<i64>() {
                if n >= 0 {
                    ctx.build_number = n;
                }
            }
        }
        if let Ok(v) = env::var("NODE_NAME") {
            if !v.is_empty() {
                ctx.node_name = v;
            }
        }
        ctx
    }
}

/// Completion-service settings. Temperature 0 keeps decoding deterministic;
/// every request carries an explicit timeout.
#[derive(Clone, Debug)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "gemma3:1b".to_string(),
            temperature: 0.0,
            timeout_secs: 120,
        }
    }
}

impl LlmSettings {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(v) = env::var("TRIAGE_OLLAMA_URL") {
            if !v.is_empty() {
                cfg.base_url = v;
            }
        }
        if let Ok(v) = env::var("TRIAGE_MODEL") {
            if !v.is_empty() {
                cfg.model = v;
            }
        }
        if let Ok(v) = env::var("TRIAGE_LLM_TIMEOUT_SECS") {
            if let Ok(n) = v.parse() {
                cfg.timeout_secs = n;
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_context_defaults() {
        let ctx = BuildContext::default();
        assert_eq!(ctx.job_name, "demo-job-1");
        assert_eq!(ctx.build_number, 42);
        assert_eq!(ctx.node_name, "built-in");
    }
}
