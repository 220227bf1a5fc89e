use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn template_prints_default_locality_prompt() {
    let ctx = TestContext::new();

    ctx.cli_without_key()
        .args(["template", "locality"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{locality}"))
        .stdout(predicate::str::contains("{url}"));
}

#[test]
fn template_accepts_translate_alias() {
    let ctx = TestContext::new();

    ctx.cli_without_key()
        .args(["tp", "translate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{target_language}"))
        .stdout(predicate::str::contains("{text}"));
}

#[test]
fn unknown_mode_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli_without_key()
        .args(["template", "brochure"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("brochure"));
}
