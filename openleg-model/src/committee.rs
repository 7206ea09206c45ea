//! Committees, their meetings and the agendas that schedule them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{Field, entity_items};
use crate::{Bill, Entity, EntityKind, EntityRef, Person, Vote};

/// A committee meeting and the bills taken up at it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meeting {
    pub meeting_date_time: Option<DateTime<Utc>>,
    pub meetday: Option<String>,
    pub location: Option<String>,
    pub committee_name: Option<String>,
    pub committee_chair: Option<String>,
    pub notes: Option<String>,
    pub committee: Option<Committee>,
    pub bills: Vec<Bill>,
    pub votes: Vec<Vote>,
    pub addendums: Vec<Addendum>,
}

type MeetingField = Field<Meeting>;

static MEETING_FIELDS: &[MeetingField] = &[
    MeetingField::datetime("meetingDateTime", |m| m.meeting_date_time),
    MeetingField::text("meetday", |m| m.meetday.as_deref()),
    MeetingField::text("location", |m| m.location.as_deref()),
    MeetingField::text("committeeName", |m| m.committee_name.as_deref()),
    MeetingField::text("committeeChair", |m| m.committee_chair.as_deref()),
    MeetingField::text("notes", |m| m.notes.as_deref()),
    MeetingField::entity("committee", EntityKind::Committee, |m| {
        m.committee.as_ref().map(EntityRef::from)
    }),
    MeetingField::list("bills", |m| entity_items(&m.bills)),
    MeetingField::list("votes", |m| entity_items(&m.votes)),
    MeetingField::list("addendums", |m| entity_items(&m.addendums)),
];

impl Entity for Meeting {
    const KIND: EntityKind = EntityKind::Meeting;

    fn fields() -> &'static [Field<Self>] {
        MEETING_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Meeting(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Committee {
    pub name: Option<String>,
    pub chair: Option<Person>,
    pub members: Vec<Person>,
}

static COMMITTEE_FIELDS: &[Field<Committee>] = &[
    Field::<Committee>::text("name", |c| c.name.as_deref()),
    Field::<Committee>::entity("chair", EntityKind::Person, |c| {
        c.chair.as_ref().map(EntityRef::from)
    }),
    Field::<Committee>::list("members", |c| entity_items(&c.members)),
];

impl Entity for Committee {
    const KIND: EntityKind = EntityKind::Committee;

    fn fields() -> &'static [Field<Self>] {
        COMMITTEE_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Committee(self)
    }
}

/// A weekly committee agenda, published as a series of addenda.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Agenda {
    pub number: i32,
    pub session_year: i32,
    pub year: i32,
    pub addendums: Vec<Addendum>,
}

static AGENDA_FIELDS: &[Field<Agenda>] = &[
    Field::<Agenda>::integer("number", |a| Some(i64::from(a.number))),
    Field::<Agenda>::integer("sessionYear", |a| Some(i64::from(a.session_year))),
    Field::<Agenda>::integer("year", |a| Some(i64::from(a.year))),
    Field::<Agenda>::list("addendums", |a| entity_items(&a.addendums)),
];

impl Entity for Agenda {
    const KIND: EntityKind = EntityKind::Agenda;

    fn fields() -> &'static [Field<Self>] {
        AGENDA_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Agenda(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Addendum {
    pub addendum_id: Option<String>,
    pub week_of: Option<String>,
    pub publication_date_time: Option<DateTime<Utc>>,
    /// Snapshot of the owning agenda.
    pub agenda: Option<Box<Agenda>>,
    pub meetings: Vec<Meeting>,
}

type AddendumField = Field<Addendum>;

static ADDENDUM_FIELDS: &[AddendumField] = &[
    AddendumField::text("addendumId", |a| a.addendum_id.as_deref()),
    AddendumField::text("weekOf", |a| a.week_of.as_deref()),
    AddendumField::datetime("publicationDateTime", |a| a.publication_date_time),
    AddendumField::entity("agenda", EntityKind::Agenda, |a| {
        a.agenda.as_deref().map(EntityRef::from)
    }),
    AddendumField::list("meetings", |a| entity_items(&a.meetings)),
];

impl Entity for Addendum {
    const KIND: EntityKind = EntityKind::Addendum;

    fn fields() -> &'static [Field<Self>] {
        ADDENDUM_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Addendum(self)
    }
}
