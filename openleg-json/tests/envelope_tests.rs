mod common;

use common::*;
use openleg_json::{ConvertError, serialize, serialize_best_effort};
use openleg_model::{
    Agenda, Calendar, CalendarEntry, Committee, EntityKind, EntityRef, Supplemental,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

// ── Envelope key ─────────────────────────────────────────────────

#[test]
fn key_is_lowercased_type_name() {
    let bill = bill();
    let envelope = serialize(Some(EntityRef::Bill(&bill)), None).unwrap();
    assert_eq!(envelope.key(), "bill");

    let entry = CalendarEntry::default();
    let envelope = serialize(Some(EntityRef::CalendarEntry(&entry)), None).unwrap();
    assert_eq!(envelope.key(), "calendarentry");
}

#[test]
fn envelope_has_exactly_one_key() {
    let transcript = transcript();
    let value = serialize(Some(EntityRef::Transcript(&transcript)), None)
        .unwrap()
        .into_value();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object["transcript"].is_object());
}

#[test]
fn envelope_key_ignores_expected_type_when_root_present() {
    let committee = Committee::default();
    let envelope = serialize(
        Some(EntityRef::Committee(&committee)),
        Some(EntityKind::Bill),
    )
    .unwrap();
    assert_eq!(envelope.key(), "committee");
}

// ── Null roots ───────────────────────────────────────────────────

#[test]
fn null_root_with_expected_type() {
    let envelope = serialize(None, Some(EntityKind::Bill)).unwrap();
    assert_eq!(envelope.key(), "bill");
    assert_eq!(envelope.body(), &Value::Null);
    assert_eq!(envelope.to_json().unwrap(), r#"{"bill":null}"#);
}

#[test]
fn null_root_without_expected_type_fails() {
    let err = serialize(None, None).unwrap_err();
    assert!(matches!(err, ConvertError::NullRootWithoutExpectedType));
}

// ── Supplementals ────────────────────────────────────────────────

#[test]
fn supplemental_root_publishes_its_calendar() {
    let owner = Calendar {
        calendar_id: Some("cal-floor-12-2013".into()),
        no: 12,
        ..Default::default()
    };
    let supplemental = Supplemental {
        supplemental_id: Some("cal-floor-12-2013-supp-A".into()),
        calendar: Some(Box::new(owner)),
        ..Default::default()
    };

    let envelope = serialize(Some(EntityRef::Supplemental(&supplemental)), None).unwrap();
    assert_eq!(
        envelope.into_value(),
        json!({
            "calendar": {
                "calendarId": "cal-floor-12-2013",
                "year": 0,
                "sessionYear": 0,
                "no": 12,
                "supplementals": []
            }
        })
    );
}

#[test]
fn orphan_supplemental_is_a_null_calendar() {
    let supplemental = Supplemental::default();

    let envelope = serialize(
        Some(EntityRef::Supplemental(&supplemental)),
        Some(EntityKind::Supplemental),
    )
    .unwrap();
    assert_eq!(envelope.key(), "calendar");
    assert_eq!(envelope.body(), &Value::Null);

    let err = serialize(Some(EntityRef::Supplemental(&supplemental)), None).unwrap_err();
    assert!(matches!(err, ConvertError::NullRootWithoutExpectedType));
}

// ── Best effort ──────────────────────────────────────────────────

#[test]
fn best_effort_matches_strict_on_success() {
    let calendar = calendar();
    let strict = serialize(Some(EntityRef::Calendar(&calendar)), None).unwrap();
    let soft = serialize_best_effort(Some(EntityRef::Calendar(&calendar)), None).unwrap();
    assert_eq!(strict, soft);
}

#[test]
fn best_effort_still_needs_a_key() {
    let err = serialize_best_effort(None, None).unwrap_err();
    assert!(matches!(err, ConvertError::NullRootWithoutExpectedType));

    let envelope = serialize_best_effort(None, Some(EntityKind::Agenda)).unwrap();
    assert_eq!(envelope.into_value(), json!({"agenda": null}));
}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn rendering_is_deterministic() {
    let meeting = meeting();
    let first = serialize(Some(EntityRef::Meeting(&meeting)), None)
        .unwrap()
        .to_json()
        .unwrap();
    let second = serialize(Some(EntityRef::Meeting(&meeting)), None)
        .unwrap()
        .to_json()
        .unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with(r#"{"meeting":{"meetingDateTime":"2014-03-04T10:00:00.000Z""#));
}

#[test]
fn pretty_rendering_parses_back_to_same_tree() {
    let agenda = Agenda {
        number: 4,
        session_year: 2013,
        year: 2014,
        addendums: Vec::new(),
    };
    let envelope = serialize(Some(EntityRef::Agenda(&agenda)), None).unwrap();
    let pretty = envelope.to_json_pretty().unwrap();
    assert!(pretty.contains('\n'));

    let parsed: Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(parsed, envelope.into_value());
}
