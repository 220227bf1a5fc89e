use crate::harness::{MockServices, TestContext};
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;

const METADATA: &str = r#""Number_of_Rooms": 3, "Furnishing": "Semi""#;

#[test]
fn listing_description_is_sanitized() {
    let mut services = MockServices::start();
    let generation = services.generation_reply(
        Matcher::PartialJson(json!({"generationConfig": {"maxOutputTokens": 2048}})),
        "```html<p>Nice flat - *sunny*</p>```\n\nGreat view",
        1,
    );
    let ctx = TestContext::with_services(&services);

    ctx.cli()
        .args(["listing", "--metadata", METADATA])
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>Nice flat    sunny </p>Great view"));

    generation.assert();
}

#[test]
fn prompt_preview_needs_no_api_key_and_calls_nothing() {
    let mut services = MockServices::start();
    let generation = services.generation_forbidden();
    let ctx = TestContext::with_services(&services);

    ctx.cli_without_key()
        .args(["listing", "--metadata", METADATA, "--prompt-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Number_of_Rooms\": 3"))
        .stdout(predicate::str::contains("# search: disabled"))
        .stdout(predicate::str::contains("real-estate agent"));

    generation.assert();
}

#[test]
fn edited_template_is_used() {
    let mut services = MockServices::start();
    let generation = services.generation_reply(
        Matcher::PartialJson(json!({
            "contents": [{"parts": [{"text": "Write about: 3 BHK"}]}]
        })),
        "ok",
        1,
    );
    let ctx = TestContext::with_services(&services);
    let template = ctx.write_file("mine.txt", "Write about: {metadata}");

    ctx.cli()
        .args(["listing", "--metadata", "3 BHK", "--template"])
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));

    generation.assert();
}

#[test]
fn template_with_unknown_placeholder_fails_before_generation() {
    let mut services = MockServices::start();
    let generation = services.generation_forbidden();
    let ctx = TestContext::with_services(&services);
    let template = ctx.write_file("bad.txt", "Write about {metadata} near {landmark}");

    ctx.cli()
        .args(["listing", "--metadata", "3 BHK", "--template"])
        .arg(&template)
        .assert()
        .failure()
        .stderr(predicate::str::contains("landmark"));

    generation.assert();
}

#[test]
fn generation_failure_is_labeled() {
    let mut services = MockServices::start();
    let _generation = services
        .generation
        .mock("POST", crate::harness::services::GENERATE_PATH)
        .with_status(429)
        .with_body(r#"{"error":{"message":"Resource has been exhausted"}}"#)
        .expect(1)
        .create();
    let ctx = TestContext::with_services(&services);

    ctx.cli()
        .args(["listing", "--metadata", "3 BHK"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Error generating listing description: Resource has been exhausted",
        ));
}

#[test]
fn generation_failure_is_reported_once_without_color_codes() {
    let mut services = MockServices::start();
    let generation = services
        .generation
        .mock("POST", crate::harness::services::GENERATE_PATH)
        .with_status(503)
        .expect(2)
        .create();
    let ctx = TestContext::with_services(&services);

    ctx.cli()
        .args(["listing", "--metadata", "3 BHK"])
        .env("ESCRIBE_LOG", "debug")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Generation call failed"))
        .stderr(predicate::str::contains("\u{1b}[").not());

    ctx.cli()
        .args(["listing", "--metadata", "3 BHK"])
        .assert()
        .failure()
        .stderr("Error: Error generating listing description: Server error\n");

    generation.assert();
}
