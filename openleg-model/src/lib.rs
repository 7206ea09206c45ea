//! Legislative entity model for OpenLeg.
//!
//! Defines the closed catalog of entity types the API publishes:
//! - [`Bill`], [`BillEvent`], [`Person`], [`Vote`]
//! - [`Meeting`], [`Committee`], [`Agenda`], [`Addendum`]
//! - [`Calendar`], [`Supplemental`], [`Section`], [`Sequence`], [`CalendarEntry`]
//! - [`Transcript`]
//!
//! Every type implements [`Entity`], registering an ordered list of
//! [`Field`]s (name, declared [`FieldType`], accessor) once, statically.
//! Consumers read entities only through that schema, never through the
//! struct fields, so derived values such as [`Bill::sort_index`] appear
//! like stored ones.
//!
//! Back-references (a vote's bill, a section's calendar...) are owned
//! snapshots rather than shared links, so an entity graph is always a finite
//! tree.

mod bill;
mod calendar;
mod committee;
mod entity;
mod schema;
mod transcript;

pub use bill::{Bill, BillEvent, Person, Vote};
pub use calendar::{Calendar, CalendarEntry, Section, Sequence, Supplemental};
pub use committee::{Addendum, Agenda, Committee, Meeting};
pub use entity::{AnyEntity, Entity, EntityKind, EntityRef, EntityVisitor, UnknownEntityKind};
pub use schema::{
    ElementKind, Field, FieldDescriptor, FieldType, FieldValue, Item, entity_items, text_items,
};
pub use transcript::Transcript;
