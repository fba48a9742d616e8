use crate::config::BuildContext;
use crate::model::{BuildFailure, NewFailure, ParsedLabels, RuleVerdict};
use crate::providers::llm::LlmClient;
use crate::storage::Store;
use crate::{loader, parser, prompt, reconcile, rules};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

/// One triage pass over one build log. Entirely linear: the completion call
/// is the only blocking operation and there is no retry or batching.
pub struct TriagePipeline {
    pub store: Store,
    pub client: Arc<dyn LlmClient>,
    pub window: usize,
}

#[derive(Debug)]
pub struct TriageOutcome {
    pub record: BuildFailure,
    pub rule: RuleVerdict,
    pub parsed: ParsedLabels,
}

impl TriagePipeline {
    pub fn new(store: Store, client: Arc<dyn LlmClient>) -> Self {
        Self {
            store,
            client,
            window: loader::DEFAULT_LOG_WINDOW,
        }
    }

    /// load -> classify -> analyze -> parse -> reconcile -> persist.
    /// A completion-service failure aborts the run before the persistence
    /// step, so no record exists for a run that produced no summary.
    pub async fn run(&self, log_path: &Path, ctx: &BuildContext) -> anyhow::Result<TriageOutcome> {
        let log_text = loader::load_tail(log_path, self.window)?;

        let rule = rules::classify(&log_text);
        tracing::info!(
            event = "rules_classified",
            severity = %rule.severity,
            category = %rule.category,
            confident = rule.confident,
        );

        let prompt = prompt::build_analysis_prompt(&log_text);
        let response = self
            .client
            .complete(&prompt)
            .await
            .context("completion service call failed")?;

        let parsed = parser::parse_labels(&response.text);
        let classification = reconcile::reconcile(&rule, &parsed);

        let id = self.store.insert_failure(&NewFailure {
            job_name: ctx.job_name.clone(),
            build_number: ctx.build_number,
            node_name: ctx.node_name.clone(),
            category: classification.category,
            severity: classification.severity,
            summary: response.text,
            created_at: None,
        })?;
        let record = self.store.get_failure(id)?;

        tracing::info!(
            event = "failure_persisted",
            id,
            job = %record.job_name,
            severity = %record.severity,
            category = %record.category,
        );

        Ok(TriageOutcome {
            record,
            rule,
            parsed,
        })
    }
}
