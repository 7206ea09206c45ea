//! Exclusion policies keyed by (entity kind, context).
//!
//! The same entity kind drops different fields depending on where it is
//! reached: a bill at the root keeps its amendments but hides its votes,
//! while a bill referenced from a meeting, vote, transcript or calendar line
//! hides its text and history but keeps its votes. Every (kind, context)
//! pair owns its own set; sets are never unioned or inherited.

use openleg_model::EntityKind;
use openleg_model::EntityKind::*;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Where an entity is being converted: as the root of the document, or as
/// the value of `parent.field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Root,
    Field {
        parent: EntityKind,
        field: &'static str,
    },
}

impl Context {
    pub const fn field(parent: EntityKind, field: &'static str) -> Self {
        Self::Field { parent, field }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::Field { parent, field } => write!(f, "{parent}.{field}"),
        }
    }
}

/// Immutable set of field names omitted from output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionSet(&'static [&'static str]);

impl ExclusionSet {
    pub const EMPTY: Self = Self(&[]);

    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self(fields)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|excluded| *excluded == field)
    }

    pub const fn fields(&self) -> &'static [&'static str] {
        self.0
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// One row of the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub kind: EntityKind,
    pub context: Context,
    pub exclude: ExclusionSet,
}

const fn policy(kind: EntityKind, context: Context, exclude: &'static [&'static str]) -> Policy {
    Policy {
        kind,
        context,
        exclude: ExclusionSet::new(exclude),
    }
}

const ROOT_BILL: &[&str] = &["sortIndex", "votes"];
const ROOT_MEETING: &[&str] = &["votes", "committee"];
const ROOT_TRANSCRIPT: &[&str] = &["relatedBills", "transcriptTextProcessed"];

/// A bill shown as a reference from another record.
const SIMPLE_BILL: &[&str] = &[
    "actClause",
    "amendments",
    "billEvents",
    "fulltext",
    "latestAmendment",
    "law",
    "memo",
    "sortIndex",
];

const LISTED_VOTE: &[&str] = &["bill", "description"];
const LISTED_CALENDAR_ENTRY: &[&str] = &["section", "sequence"];

static POLICIES: &[Policy] = &[
    policy(Bill, Context::Root, ROOT_BILL),
    policy(Meeting, Context::Root, ROOT_MEETING),
    policy(Transcript, Context::Root, ROOT_TRANSCRIPT),
    policy(Supplemental, Context::Root, &["calendar"]),
    policy(Section, Context::Root, &["calendar", "supplemental"]),
    policy(Sequence, Context::Root, &["supplemental"]),
    policy(CalendarEntry, Context::Root, LISTED_CALENDAR_ENTRY),
    policy(Bill, Context::field(Vote, "bill"), SIMPLE_BILL),
    policy(Bill, Context::field(Meeting, "bills"), SIMPLE_BILL),
    policy(Bill, Context::field(Transcript, "relatedBills"), SIMPLE_BILL),
    policy(Bill, Context::field(CalendarEntry, "bill"), SIMPLE_BILL),
    policy(Bill, Context::field(CalendarEntry, "subBill"), SIMPLE_BILL),
    policy(Vote, Context::field(Bill, "votes"), LISTED_VOTE),
    policy(Vote, Context::field(Meeting, "votes"), LISTED_VOTE),
    policy(Agenda, Context::field(Addendum, "agenda"), &["addendums"]),
    policy(Addendum, Context::field(Meeting, "addendums"), &["meetings"]),
    policy(Addendum, Context::field(Agenda, "addendums"), &["agenda"]),
    policy(
        Meeting,
        Context::field(Addendum, "meetings"),
        &["committee", "votes", "addendums"],
    ),
    policy(
        Sequence,
        Context::field(Supplemental, "sequence"),
        &["supplemental", "notes"],
    ),
    policy(
        Supplemental,
        Context::field(Calendar, "supplementals"),
        &["calendar", "supplementalId"],
    ),
    policy(
        Section,
        Context::field(Supplemental, "sections"),
        &["calendar", "supplemental"],
    ),
    policy(
        CalendarEntry,
        Context::field(Section, "calendarEntries"),
        LISTED_CALENDAR_ENTRY,
    ),
    policy(
        CalendarEntry,
        Context::field(Sequence, "calendarEntries"),
        LISTED_CALENDAR_ENTRY,
    ),
];

/// Read-only lookup over the static policy table.
#[derive(Debug)]
pub struct PolicyRegistry {
    by_key: HashMap<(EntityKind, Context), ExclusionSet>,
}

static REGISTRY: LazyLock<PolicyRegistry> = LazyLock::new(|| PolicyRegistry {
    by_key: POLICIES
        .iter()
        .map(|p| ((p.kind, p.context), p.exclude))
        .collect(),
});

impl PolicyRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static PolicyRegistry {
        &REGISTRY
    }

    /// Exclusions for `kind` converted under `context`. Pairs with no
    /// entry exclude nothing.
    pub fn policy_for(&self, kind: EntityKind, context: Context) -> ExclusionSet {
        self.by_key
            .get(&(kind, context))
            .copied()
            .unwrap_or(ExclusionSet::EMPTY)
    }

    /// Every row of the table, in declaration order.
    pub fn entries(&self) -> &'static [Policy] {
        POLICIES
    }
}

/// Shorthand for [`PolicyRegistry::policy_for`] on the global registry.
pub fn policy_for(kind: EntityKind, context: Context) -> ExclusionSet {
    PolicyRegistry::global().policy_for(kind, context)
}
