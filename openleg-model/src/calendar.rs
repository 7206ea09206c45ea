//! Floor calendars: supplementals, their sections and active-list sequences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{Field, entity_items};
use crate::{Bill, Entity, EntityKind, EntityRef};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Calendar {
    pub calendar_id: Option<String>,
    pub year: i32,
    pub r#type: Option<String>,
    pub session_year: i32,
    pub no: i32,
    pub supplementals: Vec<Supplemental>,
}

type CalendarField = Field<Calendar>;

static CALENDAR_FIELDS: &[CalendarField] = &[
    CalendarField::text("calendarId", |c| c.calendar_id.as_deref()),
    CalendarField::integer("year", |c| Some(i64::from(c.year))),
    CalendarField::text("type", |c| c.r#type.as_deref()),
    CalendarField::integer("sessionYear", |c| Some(i64::from(c.session_year))),
    CalendarField::integer("no", |c| Some(i64::from(c.no))),
    CalendarField::list("supplementals", |c| entity_items(&c.supplementals)),
];

impl Entity for Calendar {
    const KIND: EntityKind = EntityKind::Calendar;

    fn fields() -> &'static [Field<Self>] {
        CALENDAR_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Calendar(self)
    }
}

/// One release of a calendar. The API renders a supplemental through its
/// owning calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplemental {
    pub supplemental_id: Option<String>,
    pub calendar_date: Option<DateTime<Utc>>,
    pub release_date_time: Option<DateTime<Utc>>,
    pub calendar: Option<Box<Calendar>>,
    pub sections: Vec<Section>,
    pub sequence: Option<Sequence>,
}

impl Supplemental {
    /// The calendar this supplemental was released for.
    pub fn calendar(&self) -> Option<&Calendar> {
        self.calendar.as_deref()
    }
}

type SupplementalField = Field<Supplemental>;

static SUPPLEMENTAL_FIELDS: &[SupplementalField] = &[
    SupplementalField::text("supplementalId", |s| s.supplemental_id.as_deref()),
    SupplementalField::datetime("calendarDate", |s| s.calendar_date),
    SupplementalField::datetime("releaseDateTime", |s| s.release_date_time),
    SupplementalField::entity("calendar", EntityKind::Calendar, |s| {
        s.calendar().map(EntityRef::from)
    }),
    SupplementalField::list("sections", |s| entity_items(&s.sections)),
    SupplementalField::entity("sequence", EntityKind::Sequence, |s| {
        s.sequence.as_ref().map(EntityRef::from)
    }),
];

impl Entity for Supplemental {
    const KIND: EntityKind = EntityKind::Supplemental;

    fn fields() -> &'static [Field<Self>] {
        SUPPLEMENTAL_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Supplemental(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Section {
    pub name: Option<String>,
    pub r#type: i32,
    pub cd: Option<String>,
    pub calendar: Option<Box<Calendar>>,
    pub supplemental: Option<Box<Supplemental>>,
    pub calendar_entries: Vec<CalendarEntry>,
}

type SectionField = Field<Section>;

static SECTION_FIELDS: &[SectionField] = &[
    SectionField::text("name", |s| s.name.as_deref()),
    SectionField::integer("type", |s| Some(i64::from(s.r#type))),
    SectionField::text("cd", |s| s.cd.as_deref()),
    SectionField::entity("calendar", EntityKind::Calendar, |s| {
        s.calendar.as_deref().map(EntityRef::from)
    }),
    SectionField::entity("supplemental", EntityKind::Supplemental, |s| {
        s.supplemental.as_deref().map(EntityRef::from)
    }),
    SectionField::list("calendarEntries", |s| entity_items(&s.calendar_entries)),
];

impl Entity for Section {
    const KIND: EntityKind = EntityKind::Section;

    fn fields() -> &'static [Field<Self>] {
        SECTION_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Section(self)
    }
}

/// The active list of a supplemental.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sequence {
    pub no: Option<String>,
    pub act_cal_date: Option<DateTime<Utc>>,
    pub release_date_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub supplemental: Option<Box<Supplemental>>,
    pub calendar_entries: Vec<CalendarEntry>,
}

type SequenceField = Field<Sequence>;

static SEQUENCE_FIELDS: &[SequenceField] = &[
    SequenceField::text("no", |s| s.no.as_deref()),
    SequenceField::datetime("actCalDate", |s| s.act_cal_date),
    SequenceField::datetime("releaseDateTime", |s| s.release_date_time),
    SequenceField::text("notes", |s| s.notes.as_deref()),
    SequenceField::entity("supplemental", EntityKind::Supplemental, |s| {
        s.supplemental.as_deref().map(EntityRef::from)
    }),
    SequenceField::list("calendarEntries", |s| entity_items(&s.calendar_entries)),
];

impl Entity for Sequence {
    const KIND: EntityKind = EntityKind::Sequence;

    fn fields() -> &'static [Field<Self>] {
        SEQUENCE_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Sequence(self)
    }
}

/// A numbered calendar line pointing at a bill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarEntry {
    pub no: Option<String>,
    pub bill: Option<Bill>,
    /// Bill substituted for `bill`, if any.
    pub sub_bill: Option<Bill>,
    pub bill_high: Option<String>,
    pub motion_date: Option<DateTime<Utc>>,
    pub section: Option<Box<Section>>,
    pub sequence: Option<Box<Sequence>>,
}

type CalendarEntryField = Field<CalendarEntry>;

static CALENDAR_ENTRY_FIELDS: &[CalendarEntryField] = &[
    CalendarEntryField::text("no", |e| e.no.as_deref()),
    CalendarEntryField::entity("bill", EntityKind::Bill, |e| {
        e.bill.as_ref().map(EntityRef::from)
    }),
    CalendarEntryField::entity("subBill", EntityKind::Bill, |e| {
        e.sub_bill.as_ref().map(EntityRef::from)
    }),
    CalendarEntryField::text("billHigh", |e| e.bill_high.as_deref()),
    CalendarEntryField::datetime("motionDate", |e| e.motion_date),
    CalendarEntryField::entity("section", EntityKind::Section, |e| {
        e.section.as_deref().map(EntityRef::from)
    }),
    CalendarEntryField::entity("sequence", EntityKind::Sequence, |e| {
        e.sequence.as_deref().map(EntityRef::from)
    }),
];

impl Entity for CalendarEntry {
    const KIND: EntityKind = EntityKind::CalendarEntry;

    fn fields() -> &'static [Field<Self>] {
        CALENDAR_ENTRY_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::CalendarEntry(self)
    }
}
