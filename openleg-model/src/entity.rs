use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::schema::{Field, FieldDescriptor};
use crate::{
    Addendum, Agenda, Bill, BillEvent, Calendar, CalendarEntry, Committee, Meeting, Person,
    Section, Sequence, Supplemental, Transcript, Vote,
};

/// A domain object eligible for conversion.
///
/// Implementors register their serializable fields once, as a static
/// ordered list; the order is the order keys appear in output.
pub trait Entity: Sized + 'static {
    const KIND: EntityKind;

    fn fields() -> &'static [Field<Self>];

    /// Borrow this entity as a runtime-typed handle.
    fn entity_ref(&self) -> EntityRef<'_>;
}

/// The closed catalog of entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Bill,
    BillEvent,
    Person,
    Vote,
    Meeting,
    Committee,
    Agenda,
    Addendum,
    Calendar,
    Supplemental,
    Section,
    Sequence,
    CalendarEntry,
    Transcript,
}

impl EntityKind {
    pub const ALL: [EntityKind; 14] = [
        Self::Bill,
        Self::BillEvent,
        Self::Person,
        Self::Vote,
        Self::Meeting,
        Self::Committee,
        Self::Agenda,
        Self::Addendum,
        Self::Calendar,
        Self::Supplemental,
        Self::Section,
        Self::Sequence,
        Self::CalendarEntry,
        Self::Transcript,
    ];

    /// Simple type name, e.g. `"CalendarEntry"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bill => "Bill",
            Self::BillEvent => "BillEvent",
            Self::Person => "Person",
            Self::Vote => "Vote",
            Self::Meeting => "Meeting",
            Self::Committee => "Committee",
            Self::Agenda => "Agenda",
            Self::Addendum => "Addendum",
            Self::Calendar => "Calendar",
            Self::Supplemental => "Supplemental",
            Self::Section => "Section",
            Self::Sequence => "Sequence",
            Self::CalendarEntry => "CalendarEntry",
            Self::Transcript => "Transcript",
        }
    }

    /// Lower-cased simple type name, used as the top-level envelope key.
    pub fn envelope_key(self) -> String {
        self.name().to_lowercase()
    }

    /// Ordered field descriptors of this kind.
    pub fn descriptors(self) -> Vec<FieldDescriptor> {
        fn of<E: Entity>() -> Vec<FieldDescriptor> {
            E::fields().iter().map(Field::descriptor).collect()
        }

        match self {
            Self::Bill => of::<Bill>(),
            Self::BillEvent => of::<BillEvent>(),
            Self::Person => of::<Person>(),
            Self::Vote => of::<Vote>(),
            Self::Meeting => of::<Meeting>(),
            Self::Committee => of::<Committee>(),
            Self::Agenda => of::<Agenda>(),
            Self::Addendum => of::<Addendum>(),
            Self::Calendar => of::<Calendar>(),
            Self::Supplemental => of::<Supplemental>(),
            Self::Section => of::<Section>(),
            Self::Sequence => of::<Sequence>(),
            Self::CalendarEntry => of::<CalendarEntry>(),
            Self::Transcript => of::<Transcript>(),
        }
    }

    /// Whether `field` is a registered field of this kind.
    pub fn has_field(self, field: &str) -> bool {
        self.descriptors().iter().any(|d| d.name == field)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no entity kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind: {0}")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

/// Borrowed handle to an entity whose concrete type is known only at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityRef<'a> {
    Bill(&'a Bill),
    BillEvent(&'a BillEvent),
    Person(&'a Person),
    Vote(&'a Vote),
    Meeting(&'a Meeting),
    Committee(&'a Committee),
    Agenda(&'a Agenda),
    Addendum(&'a Addendum),
    Calendar(&'a Calendar),
    Supplemental(&'a Supplemental),
    Section(&'a Section),
    Sequence(&'a Sequence),
    CalendarEntry(&'a CalendarEntry),
    Transcript(&'a Transcript),
}

/// Operation generic over the concrete entity type behind an [`EntityRef`].
pub trait EntityVisitor<'a> {
    type Output;

    fn visit<E: Entity>(self, entity: &'a E) -> Self::Output;
}

impl<'a> EntityRef<'a> {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Bill(_) => EntityKind::Bill,
            Self::BillEvent(_) => EntityKind::BillEvent,
            Self::Person(_) => EntityKind::Person,
            Self::Vote(_) => EntityKind::Vote,
            Self::Meeting(_) => EntityKind::Meeting,
            Self::Committee(_) => EntityKind::Committee,
            Self::Agenda(_) => EntityKind::Agenda,
            Self::Addendum(_) => EntityKind::Addendum,
            Self::Calendar(_) => EntityKind::Calendar,
            Self::Supplemental(_) => EntityKind::Supplemental,
            Self::Section(_) => EntityKind::Section,
            Self::Sequence(_) => EntityKind::Sequence,
            Self::CalendarEntry(_) => EntityKind::CalendarEntry,
            Self::Transcript(_) => EntityKind::Transcript,
        }
    }

    /// Run `visitor` against the concrete entity.
    pub fn accept<V: EntityVisitor<'a>>(self, visitor: V) -> V::Output {
        match self {
            Self::Bill(e) => visitor.visit(e),
            Self::BillEvent(e) => visitor.visit(e),
            Self::Person(e) => visitor.visit(e),
            Self::Vote(e) => visitor.visit(e),
            Self::Meeting(e) => visitor.visit(e),
            Self::Committee(e) => visitor.visit(e),
            Self::Agenda(e) => visitor.visit(e),
            Self::Addendum(e) => visitor.visit(e),
            Self::Calendar(e) => visitor.visit(e),
            Self::Supplemental(e) => visitor.visit(e),
            Self::Section(e) => visitor.visit(e),
            Self::Sequence(e) => visitor.visit(e),
            Self::CalendarEntry(e) => visitor.visit(e),
            Self::Transcript(e) => visitor.visit(e),
        }
    }
}

/// Owned entity of any kind, e.g. a root loaded from a fixture.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyEntity {
    Bill(Bill),
    BillEvent(BillEvent),
    Person(Person),
    Vote(Vote),
    Meeting(Meeting),
    Committee(Committee),
    Agenda(Agenda),
    Addendum(Addendum),
    Calendar(Calendar),
    Supplemental(Supplemental),
    Section(Section),
    Sequence(Sequence),
    CalendarEntry(CalendarEntry),
    Transcript(Transcript),
}

impl AnyEntity {
    pub fn kind(&self) -> EntityKind {
        self.entity_ref().kind()
    }

    pub fn entity_ref(&self) -> EntityRef<'_> {
        match self {
            Self::Bill(e) => e.entity_ref(),
            Self::BillEvent(e) => e.entity_ref(),
            Self::Person(e) => e.entity_ref(),
            Self::Vote(e) => e.entity_ref(),
            Self::Meeting(e) => e.entity_ref(),
            Self::Committee(e) => e.entity_ref(),
            Self::Agenda(e) => e.entity_ref(),
            Self::Addendum(e) => e.entity_ref(),
            Self::Calendar(e) => e.entity_ref(),
            Self::Supplemental(e) => e.entity_ref(),
            Self::Section(e) => e.entity_ref(),
            Self::Sequence(e) => e.entity_ref(),
            Self::CalendarEntry(e) => e.entity_ref(),
            Self::Transcript(e) => e.entity_ref(),
        }
    }

    /// Deserialize a JSON document as an entity of `kind`.
    pub fn from_json(kind: EntityKind, value: serde_json::Value) -> serde_json::Result<Self> {
        use serde_json::from_value;

        Ok(match kind {
            EntityKind::Bill => Self::Bill(from_value(value)?),
            EntityKind::BillEvent => Self::BillEvent(from_value(value)?),
            EntityKind::Person => Self::Person(from_value(value)?),
            EntityKind::Vote => Self::Vote(from_value(value)?),
            EntityKind::Meeting => Self::Meeting(from_value(value)?),
            EntityKind::Committee => Self::Committee(from_value(value)?),
            EntityKind::Agenda => Self::Agenda(from_value(value)?),
            EntityKind::Addendum => Self::Addendum(from_value(value)?),
            EntityKind::Calendar => Self::Calendar(from_value(value)?),
            EntityKind::Supplemental => Self::Supplemental(from_value(value)?),
            EntityKind::Section => Self::Section(from_value(value)?),
            EntityKind::Sequence => Self::Sequence(from_value(value)?),
            EntityKind::CalendarEntry => Self::CalendarEntry(from_value(value)?),
            EntityKind::Transcript => Self::Transcript(from_value(value)?),
        })
    }
}

macro_rules! impl_conversions {
    ($($kind:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $kind> for EntityRef<'a> {
                fn from(entity: &'a $kind) -> Self {
                    Self::$kind(entity)
                }
            }

            impl From<$kind> for AnyEntity {
                fn from(entity: $kind) -> Self {
                    Self::$kind(entity)
                }
            }
        )*
    };
}

impl_conversions!(
    Bill,
    BillEvent,
    Person,
    Vote,
    Meeting,
    Committee,
    Agenda,
    Addendum,
    Calendar,
    Supplemental,
    Section,
    Sequence,
    CalendarEntry,
    Transcript,
);
