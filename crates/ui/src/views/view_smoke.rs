use track_core::model::ModuleId;

use super::test_harness::{ViewKind, setup_view_harness};

#[test]
fn intro_view_smoke_renders_hero_and_module_cards() {
    let mut harness = setup_view_harness(ViewKind::Intro);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("log in to a website?"),
        "missing hero heading in {html}"
    );
    assert!(html.contains("Login Journey"), "missing module card");
    assert!(html.contains("MFA Choices"), "missing module card");
    assert_eq!(
        html.matches("Open module").count(),
        4,
        "expected one card per module in {html}"
    );
}

#[test]
fn handshake_module_smoke_renders_timeline_and_quiz() {
    let mut harness = setup_view_harness(ViewKind::Module(ModuleId::Handshake));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("TLS Handshake"), "missing title in {html}");
    assert!(html.contains("Handshake timeline"), "missing topics panel");
    assert!(html.contains("Client hello"), "missing first phase");
    assert!(html.contains("Question 1 of 3"), "missing quiz progress");
    assert!(
        html.contains("Unlocked: 1 / 3 questions"),
        "missing unlock label"
    );
    assert!(html.contains("Check my answer"), "missing check button");
    // The toggle only appears for modules with a technical variant.
    assert!(html.contains("Student-friendly view"), "missing toggle");
}

#[test]
fn journey_module_smoke_renders_steps_with_layers() {
    let mut harness = setup_view_harness(ViewKind::Module(ModuleId::Journey));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Step-by-step view"), "missing panel heading");
    assert!(html.contains("Transport (TCP)"), "missing layer label");
    assert!(
        html.contains("not sent yet"),
        "missing login-data chip for the first step"
    );
    // No technical variant authored for this module.
    assert!(!html.contains("Student-friendly view"));
}

#[test]
fn mfa_module_smoke_opens_on_the_strongest_method() {
    let mut harness = setup_view_harness(ViewKind::Module(ModuleId::Mfa));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Authentication methods"), "missing panel");
    assert!(
        html.contains("signs a challenge"),
        "expected the passkey detail to be selected initially in {html}"
    );
    assert!(
        html.contains("Pick the right method for the situation"),
        "missing scenario panel"
    );
    assert!(html.contains("Recommended:"), "missing recommendation");
}

#[test]
fn padlock_module_smoke_renders_comparison_cards() {
    let mut harness = setup_view_harness(ViewKind::Module(ModuleId::Padlock));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Compare these login pages"), "missing panel");
    assert!(
        html.contains("portal.school-example.edu"),
        "missing card domain"
    );
    assert!(html.contains("Check my choice"), "missing check button");
    assert!(html.contains("Padlock quiz"), "missing quiz heading");
}
