//! Bills and the entities hanging off them: sponsors, actions and roll calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{Field, entity_items, text_items};
use crate::{Entity, EntityKind, EntityRef};

/// A bill or one of its amended versions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bill {
    /// Print number with amendment letter and session, e.g. `S1234A-2013`.
    pub senate_bill_no: Option<String>,
    pub year: i32,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub sponsor: Option<Person>,
    pub co_sponsors: Vec<Person>,
    pub multi_sponsors: Vec<Person>,
    pub act_clause: Option<String>,
    pub fulltext: Option<String>,
    pub memo: Option<String>,
    pub law: Option<String>,
    pub law_section: Option<String>,
    pub current_committee: Option<String>,
    pub same_as: Option<String>,
    pub previous_versions: Vec<String>,
    pub amendments: Vec<Bill>,
    pub latest_amendment: Option<String>,
    pub bill_events: Vec<BillEvent>,
    pub votes: Vec<Vote>,
    pub frozen: bool,
    pub publish_date: Option<DateTime<Utc>>,
}

impl Bill {
    /// Ordering key derived from the print number: the bill's digits times
    /// 100 plus the ordinal of its amendment letter (`A` = 1).
    ///
    /// `S1234A-2013` sorts as 123401. Returns `None` when the number has no
    /// digits or the index does not fit in an `i64`.
    pub fn sort_index(&self) -> Option<i64> {
        let number = self.senate_bill_no.as_deref()?;
        let print_no = number.split('-').next().unwrap_or(number);
        let body = print_no.trim_start_matches(|c: char| c.is_ascii_alphabetic());

        let digits: String = body.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let base: i64 = digits.parse().ok()?;

        let amendment = body[digits.len()..]
            .chars()
            .next()
            .filter(char::is_ascii_alphabetic)
            .map_or(0, |c| i64::from(c.to_ascii_uppercase() as u8 - b'A' + 1));

        base.checked_mul(100)?.checked_add(amendment)
    }
}

type BillField = Field<Bill>;

static BILL_FIELDS: &[BillField] = &[
    BillField::text("senateBillNo", |b| b.senate_bill_no.as_deref()),
    BillField::integer("year", |b| Some(i64::from(b.year))),
    BillField::text("title", |b| b.title.as_deref()),
    BillField::text("summary", |b| b.summary.as_deref()),
    BillField::entity("sponsor", EntityKind::Person, |b| {
        b.sponsor.as_ref().map(EntityRef::from)
    }),
    BillField::list("coSponsors", |b| entity_items(&b.co_sponsors)),
    BillField::list("multiSponsors", |b| entity_items(&b.multi_sponsors)),
    BillField::text("actClause", |b| b.act_clause.as_deref()),
    BillField::text("fulltext", |b| b.fulltext.as_deref()),
    BillField::text("memo", |b| b.memo.as_deref()),
    BillField::text("law", |b| b.law.as_deref()),
    BillField::text("lawSection", |b| b.law_section.as_deref()),
    BillField::text("currentCommittee", |b| b.current_committee.as_deref()),
    BillField::text("sameAs", |b| b.same_as.as_deref()),
    BillField::list("previousVersions", |b| text_items(&b.previous_versions)),
    BillField::list("amendments", |b| entity_items(&b.amendments)),
    BillField::text("latestAmendment", |b| b.latest_amendment.as_deref()),
    BillField::list("billEvents", |b| entity_items(&b.bill_events)),
    BillField::list("votes", |b| entity_items(&b.votes)),
    BillField::boolean("frozen", |b| Some(b.frozen)),
    BillField::datetime("publishDate", |b| b.publish_date),
    BillField::integer("sortIndex", Bill::sort_index),
];

impl Entity for Bill {
    const KIND: EntityKind = EntityKind::Bill;

    fn fields() -> &'static [Field<Self>] {
        BILL_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Bill(self)
    }
}

/// A recorded action on a bill (referral, reading, passage...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillEvent {
    pub bill_id: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub event_text: Option<String>,
}

static BILL_EVENT_FIELDS: &[Field<BillEvent>] = &[
    Field::<BillEvent>::text("billId", |e| e.bill_id.as_deref()),
    Field::<BillEvent>::datetime("eventDate", |e| e.event_date),
    Field::<BillEvent>::text("eventText", |e| e.event_text.as_deref()),
];

impl Entity for BillEvent {
    const KIND: EntityKind = EntityKind::BillEvent;

    fn fields() -> &'static [Field<Self>] {
        BILL_EVENT_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::BillEvent(self)
    }
}

/// A legislator, as named on a bill or committee roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub fullname: Option<String>,
    pub position: Option<String>,
}

static PERSON_FIELDS: &[Field<Person>] = &[
    Field::<Person>::text("fullname", |p| p.fullname.as_deref()),
    Field::<Person>::text("position", |p| p.position.as_deref()),
];

impl Entity for Person {
    const KIND: EntityKind = EntityKind::Person;

    fn fields() -> &'static [Field<Self>] {
        PERSON_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Person(self)
    }
}

/// A roll call on a bill, either on the floor or in committee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vote {
    pub vote_type: i32,
    pub vote_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    /// Snapshot of the bill voted on.
    pub bill: Option<Box<Bill>>,
    pub ayes: Vec<String>,
    pub nays: Vec<String>,
    pub abstains: Vec<String>,
    pub excused: Vec<String>,
    pub absent: Vec<String>,
    pub aye_without_record: Vec<String>,
}

impl Vote {
    pub const TYPE_FLOOR: i32 = 1;
    pub const TYPE_COMMITTEE: i32 = 2;
}

type VoteField = Field<Vote>;

static VOTE_FIELDS: &[VoteField] = &[
    VoteField::integer("voteType", |v| Some(i64::from(v.vote_type))),
    VoteField::datetime("voteDate", |v| v.vote_date),
    VoteField::text("description", |v| v.description.as_deref()),
    VoteField::entity("bill", EntityKind::Bill, |v| {
        v.bill.as_deref().map(EntityRef::from)
    }),
    VoteField::list("ayes", |v| text_items(&v.ayes)),
    VoteField::list("nays", |v| text_items(&v.nays)),
    VoteField::list("abstains", |v| text_items(&v.abstains)),
    VoteField::list("excused", |v| text_items(&v.excused)),
    VoteField::list("absent", |v| text_items(&v.absent)),
    VoteField::list("ayeWithoutRecord", |v| text_items(&v.aye_without_record)),
];

impl Entity for Vote {
    const KIND: EntityKind = EntityKind::Vote;

    fn fields() -> &'static [Field<Self>] {
        VOTE_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Vote(self)
    }
}
