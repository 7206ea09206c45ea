use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Entity, EntityKind, EntityRef};

/// The declared type of a serializable field.
///
/// Nested entity fields carry the kind they hold so the declared type alone
/// says how the field should be encoded, without reading its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Integer,
    Boolean,
    DateTime,
    Entity(EntityKind),
    /// A list whose element type is only known once an element is inspected.
    List,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Integer => f.write_str("integer"),
            Self::Boolean => f.write_str("boolean"),
            Self::DateTime => f.write_str("date_time"),
            Self::Entity(kind) => write!(f, "entity({})", kind.name()),
            Self::List => f.write_str("list"),
        }
    }
}

/// Instance-free view of a field: its name and declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub field_type: FieldType,
}

enum Accessor<T> {
    Text(fn(&T) -> Option<&str>),
    Integer(fn(&T) -> Option<i64>),
    Boolean(fn(&T) -> Option<bool>),
    DateTime(fn(&T) -> Option<DateTime<Utc>>),
    Entity(fn(&T) -> Option<EntityRef<'_>>),
    List(fn(&T) -> Vec<Item<'_>>),
}

/// One serializable field of entity type `T`: name, declared type and the
/// accessor that reads it.
///
/// Fields are only built through the typed constructors below, so the
/// declared type always agrees with what the accessor returns.
pub struct Field<T> {
    name: &'static str,
    field_type: FieldType,
    accessor: Accessor<T>,
}

impl<T> Field<T> {
    /// Shorthand for an optional string field.
    pub const fn text(name: &'static str, get: fn(&T) -> Option<&str>) -> Self {
        Self {
            name,
            field_type: FieldType::Text,
            accessor: Accessor::Text(get),
        }
    }

    /// Shorthand for an integer field.
    pub const fn integer(name: &'static str, get: fn(&T) -> Option<i64>) -> Self {
        Self {
            name,
            field_type: FieldType::Integer,
            accessor: Accessor::Integer(get),
        }
    }

    /// Shorthand for a boolean flag.
    pub const fn boolean(name: &'static str, get: fn(&T) -> Option<bool>) -> Self {
        Self {
            name,
            field_type: FieldType::Boolean,
            accessor: Accessor::Boolean(get),
        }
    }

    /// Shorthand for a UTC timestamp field.
    pub const fn datetime(name: &'static str, get: fn(&T) -> Option<DateTime<Utc>>) -> Self {
        Self {
            name,
            field_type: FieldType::DateTime,
            accessor: Accessor::DateTime(get),
        }
    }

    /// Shorthand for a nested entity of a fixed kind.
    pub const fn entity(
        name: &'static str,
        kind: EntityKind,
        get: fn(&T) -> Option<EntityRef<'_>>,
    ) -> Self {
        Self {
            name,
            field_type: FieldType::Entity(kind),
            accessor: Accessor::Entity(get),
        }
    }

    /// Shorthand for a list field. The accessor erases the element type.
    pub const fn list(name: &'static str, get: fn(&T) -> Vec<Item<'_>>) -> Self {
        Self {
            name,
            field_type: FieldType::List,
            accessor: Accessor::List(get),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub const fn descriptor(&self) -> FieldDescriptor {
        FieldDescriptor {
            name: self.name,
            field_type: self.field_type,
        }
    }

    /// Read this field from `entity` through its accessor.
    pub fn read<'a>(&self, entity: &'a T) -> FieldValue<'a> {
        match &self.accessor {
            Accessor::Text(get) => FieldValue::Text(get(entity)),
            Accessor::Integer(get) => FieldValue::Integer(get(entity)),
            Accessor::Boolean(get) => FieldValue::Boolean(get(entity)),
            Accessor::DateTime(get) => FieldValue::DateTime(get(entity)),
            Accessor::Entity(get) => FieldValue::Entity(get(entity)),
            Accessor::List(get) => FieldValue::List(get(entity)),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .finish()
    }
}

/// A field's value as read through its accessor. `None` means unset.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Integer(Option<i64>),
    Boolean(Option<bool>),
    DateTime(Option<DateTime<Utc>>),
    Entity(Option<EntityRef<'a>>),
    List(Vec<Item<'a>>),
}

/// One element of a type-erased list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item<'a> {
    Entity(EntityRef<'a>),
    Text(&'a str),
}

impl Item<'_> {
    /// The runtime element type of this item.
    pub fn element_kind(&self) -> ElementKind {
        match self {
            Self::Entity(entity) => ElementKind::Entity(entity.kind()),
            Self::Text(_) => ElementKind::Text,
        }
    }
}

/// Runtime type of a list element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Entity(EntityKind),
    Text,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity(kind) => f.write_str(kind.name()),
            Self::Text => f.write_str("String"),
        }
    }
}

/// Erase a slice of entities into list items.
pub fn entity_items<E: Entity>(list: &[E]) -> Vec<Item<'_>> {
    list.iter().map(|e| Item::Entity(e.entity_ref())).collect()
}

/// Erase a slice of strings into list items.
pub fn text_items(list: &[String]) -> Vec<Item<'_>> {
    list.iter().map(|s| Item::Text(s.as_str())).collect()
}
