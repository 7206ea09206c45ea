use std::io::Write;

use openleg_model::EntityKind;
use openleg_render::{RenderOptions, render, render_file};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const BILL_FIXTURE: &str = r#"{
    "senateBillNo": "S1234-2013",
    "year": 2013,
    "summary": "An act to amend...",
    "votes": [{"voteType": 1, "ayes": ["ADAMS"]}],
    "amendments": [{
        "senateBillNo": "S1234A-2013",
        "year": 2013,
        "votes": [{"voteType": 1, "description": "Third reading", "ayes": ["ADAMS"]}]
    }]
}"#;

fn parse(rendered: &str) -> Value {
    serde_json::from_str(rendered).unwrap()
}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn renders_bill_under_root_policy() {
    let rendered = render(EntityKind::Bill, BILL_FIXTURE, &RenderOptions::default()).unwrap();
    let document = parse(&rendered);

    let bill = &document["bill"];
    assert_eq!(bill["summary"], json!("An act to amend..."));
    assert!(bill.get("votes").is_none());
    assert_eq!(
        bill["amendments"][0]["votes"],
        json!([{
            "voteType": 1,
            "ayes": ["ADAMS"],
            "nays": [],
            "abstains": [],
            "excused": [],
            "absent": [],
            "ayeWithoutRecord": []
        }])
    );
}

#[test]
fn compact_output_is_single_line() {
    let rendered = render(EntityKind::Bill, BILL_FIXTURE, &RenderOptions::default()).unwrap();
    assert!(!rendered.contains('\n'));
    assert!(rendered.starts_with(r#"{"bill":{"senateBillNo":"S1234-2013""#));
}

#[test]
fn pretty_output_is_indented() {
    let options = RenderOptions {
        pretty: true,
        ..Default::default()
    };
    let rendered = render(EntityKind::Person, r#"{"fullname": "SMITH"}"#, &options).unwrap();
    assert_eq!(rendered, "{\n  \"person\": {\n    \"fullname\": \"SMITH\"\n  }\n}");
}

#[test]
fn null_fixture_renders_null_body() {
    let rendered = render(EntityKind::Meeting, "null", &RenderOptions::default()).unwrap();
    assert_eq!(rendered, r#"{"meeting":null}"#);
}

#[test]
fn supplemental_fixture_renders_as_calendar() {
    let fixture = r#"{"supplementalId": "A", "calendar": {"calendarId": "cal-1", "no": 1}}"#;
    let rendered = render(EntityKind::Supplemental, fixture, &RenderOptions::default()).unwrap();
    assert_eq!(
        parse(&rendered),
        json!({"calendar": {
            "calendarId": "cal-1",
            "year": 0,
            "sessionYear": 0,
            "no": 1,
            "supplementals": []
        }})
    );
}

#[test]
fn best_effort_renders_same_as_strict_on_success() {
    let strict = render(EntityKind::Bill, BILL_FIXTURE, &RenderOptions::default()).unwrap();
    let soft = render(
        EntityKind::Bill,
        BILL_FIXTURE,
        &RenderOptions {
            best_effort: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(strict, soft);
}

// ── Failures ─────────────────────────────────────────────────────

#[test]
fn invalid_json_is_reported() {
    let err = render(EntityKind::Bill, "{not json", &RenderOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("not valid JSON"));
}

#[test]
fn wrong_shape_names_the_kind() {
    let err = render(EntityKind::Vote, r#"{"voteType": "floor"}"#, &RenderOptions::default())
        .unwrap_err();
    assert!(format!("{err:#}").contains("not a valid Vote"));
}

// ── Fixture files ────────────────────────────────────────────────

#[test]
fn renders_fixture_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"name": "Transportation", "members": [{"fullname": "JONES"}]}"#)
        .unwrap();

    let rendered = render_file(file.path(), EntityKind::Committee, &RenderOptions::default())
        .unwrap();
    assert_eq!(
        parse(&rendered),
        json!({"committee": {"name": "Transportation", "members": [{"fullname": "JONES"}]}})
    );
}

#[test]
fn missing_fixture_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = render_file(&path, EntityKind::Bill, &RenderOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read fixture"));
}
