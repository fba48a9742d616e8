use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use triage_core::config::BuildContext;
use triage_core::engine::pipeline::TriagePipeline;
use triage_core::providers::llm::fake::FakeClient;
use triage_core::storage::Store;

fn write_log(content: &str) -> anyhow::Result<NamedTempFile> {
    let mut tmp = NamedTempFile::new()?;
    tmp.write_all(content.as_bytes())?;
    Ok(tmp)
}

fn pipeline(client: FakeClient) -> anyhow::Result<TriagePipeline> {
    let store = Store::memory()?;
    store.init_schema()?;
    Ok(TriagePipeline::new(store, Arc::new(client)))
}

#[tokio::test]
async fn confident_rule_overrides_conflicting_ai_labels() -> anyhow::Result<()> {
    // "connection refused" matches the infra group, so the AI's labels must
    // not move severity/category even though they are present and different.
    let log = write_log("ERROR: connection refused to remote host")?;
    let ai = "Severity: minor\nCategory: test\n\nFailure Reason:\nA remote endpoint rejected the connection.";
    let p = pipeline(FakeClient::with_text(ai))?;

    let outcome = p.run(log.path(), &BuildContext::default()).await?;
    assert!(outcome.rule.confident);
    assert_eq!(outcome.record.severity, "blocker");
    assert_eq!(outcome.record.category, "infra");
    // The narrative still comes from the AI path.
    assert!(outcome.record.summary.contains("rejected the connection"));

    let recent = p.store.recent_failures(1)?;
    assert_eq!(recent[0].severity, "blocker");
    assert_eq!(recent[0].category, "infra");
    Ok(())
}

#[tokio::test]
async fn unconfident_rule_takes_ai_labels() -> anyhow::Result<()> {
    let log = write_log("compilation halted for an unstated reason")?;
    let ai = "Severity: blocker\nCategory: infra\n\nFailure Reason:\nInsufficient information in log";
    let p = pipeline(FakeClient::with_text(ai))?;

    let outcome = p.run(log.path(), &BuildContext::default()).await?;
    assert!(!outcome.rule.confident);
    assert_eq!(outcome.record.severity, "blocker");
    assert_eq!(outcome.record.category, "infra");
    Ok(())
}

#[tokio::test]
async fn noncompliant_ai_output_degrades_to_rule_defaults() -> anyhow::Result<()> {
    let log = write_log("compilation halted for an unstated reason")?;
    let p = pipeline(FakeClient::with_text("free-form text without any labels"))?;

    let outcome = p.run(log.path(), &BuildContext::default()).await?;
    assert_eq!(outcome.parsed.severity, None);
    assert_eq!(outcome.parsed.category, None);
    assert_eq!(outcome.record.severity, "major");
    assert_eq!(outcome.record.category, "build");
    Ok(())
}

#[tokio::test]
async fn service_failure_persists_nothing() -> anyhow::Result<()> {
    let log = write_log("ERROR: connection refused")?;
    let p = pipeline(FakeClient::failing())?;

    let err = p.run(log.path(), &BuildContext::default()).await.unwrap_err();
    assert!(format!("{err:#}").contains("completion service call failed"));

    let (total, _) = p.store.category_distribution()?;
    assert_eq!(total, 0);
    Ok(())
}

#[tokio::test]
async fn missing_log_file_fails_before_any_call() -> anyhow::Result<()> {
    let p = pipeline(FakeClient::failing())?;
    let err = p
        .run(std::path::Path::new("/no/such/build.log"), &BuildContext::default())
        .await
        .unwrap_err();
    // The loader error, not the client error: the pipeline never got there.
    assert!(err.to_string().contains("log file not found"));
    Ok(())
}

#[tokio::test]
async fn context_metadata_lands_on_the_record() -> anyhow::Result<()> {
    let log = write_log("flaky test detected")?;
    let p = pipeline(FakeClient::with_text("Severity: minor\nCategory: test"))?;

    let ctx = BuildContext {
        job_name: "payments-nightly".to_string(),
        build_number: 8812,
        node_name: "agent-7".to_string(),
    };
    let outcome = p.run(log.path(), &ctx).await?;
    assert_eq!(outcome.record.job_name, "payments-nightly");
    assert_eq!(outcome.record.build_number, 8812);
    assert_eq!(outcome.record.node_name, "agent-7");
    Ok(())
}
