use crate::harness::{MockServices, TestContext};
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;
use std::fs;

const PROJECT: &str = r#"{"projectName":"Fort Oasis","possession":"Ready To Move"}"#;

#[test]
fn project_fetch_500_blocks_translation() {
    let mut services = MockServices::start();
    let project = services.project("308832", 500, "");
    let generation = services.generation_forbidden();
    let ctx = TestContext::with_services(&services);

    ctx.cli()
        .args(["translate", "--project-id", "308832"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("308832"))
        .stderr(predicate::str::contains("500"));

    project.assert();
    generation.assert();
}

#[test]
fn translation_embeds_project_json_and_writes_text_artifact() {
    let mut services = MockServices::start();
    let _project = services.project("308832", 200, PROJECT);
    let generation = services.generation_reply(
        Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "generationConfig": {"maxOutputTokens": 3024, "temperature": 1.0}
            })),
            Matcher::Regex("Fort Oasis".to_string()),
            Matcher::Regex("into Marathi".to_string()),
        ]),
        "  {\"projectName\": \"फोर्ट ओएसिस\"}\n",
        1,
    );
    let ctx = TestContext::with_services(&services);
    let out = ctx.work_dir().join("downloads");

    ctx.cli()
        .args(["translate", "--project-id", "308832", "--language", "marathi", "--output-dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("{projectName: फोर्ट ओएसिस}"));

    generation.assert();
    assert!(out.join("translated_308832_mr.txt").exists());
    let saved = fs::read_to_string(out.join("translated_308832_mr.txt")).unwrap();
    assert!(!saved.contains('"'));
}

#[test]
fn show_data_prints_fetched_project() {
    let mut services = MockServices::start();
    let _project = services.project("77", 200, PROJECT);
    let ctx = TestContext::with_services(&services);

    ctx.cli_without_key()
        .args(["translate", "--project-id", "77", "--show-data", "--prompt-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"projectName\": \"Fort Oasis\""))
        .stdout(predicate::str::contains("into Hindi"));
}

#[test]
fn unsupported_language_is_rejected_by_the_parser() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["translate", "--project-id", "1", "--language", "tamil"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tamil"));
}

#[test]
fn show_data_is_printed_even_when_translation_fails() {
    let mut services = MockServices::start();
    let _project = services.project("77", 200, PROJECT);
    let generation = services
        .generation
        .mock("POST", crate::harness::services::GENERATE_PATH)
        .with_status(429)
        .with_body(r#"{"error":{"message":"Resource has been exhausted"}}"#)
        .expect(1)
        .create();
    let ctx = TestContext::with_services(&services);

    ctx.cli()
        .args(["translate", "--project-id", "77", "--show-data"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("\"projectName\": \"Fort Oasis\""))
        .stderr(predicate::str::contains(
            "Error: Error translating text: Resource has been exhausted",
        ));

    generation.assert();
}
