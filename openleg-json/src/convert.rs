//! The recursive converter: one entity plus an exclusion set in, one JSON
//! object out.

use openleg_model::{Entity, EntityKind, EntityRef, EntityVisitor, Field, FieldValue};
use serde_json::{Map, Number, Value};
use tracing::{debug, trace};

use crate::dispatch::{Strategy, strategy_for};
use crate::error::{ConvertError, ConvertResult};
use crate::list::encode_list;
use crate::policy::{Context, ExclusionSet, policy_for};
use crate::timestamp::format_timestamp;

/// Converts `entity` with the given exclusions. A missing entity converts
/// to `null`.
///
/// Fields are visited in schema order. Excluded fields are skipped before
/// their type is looked at, so an excluded field never fails conversion.
/// Unset scalars, dates and nested entities are omitted; list fields are
/// always present.
pub fn convert(entity: Option<EntityRef<'_>>, exclusions: ExclusionSet) -> ConvertResult<Value> {
    match entity {
        Some(entity) => convert_entity(entity, exclusions).map(Value::Object),
        None => Ok(Value::Null),
    }
}

pub(crate) fn convert_entity(
    entity: EntityRef<'_>,
    exclusions: ExclusionSet,
) -> ConvertResult<Map<String, Value>> {
    entity.accept(Converter { exclusions })
}

struct Converter {
    exclusions: ExclusionSet,
}

impl<'a> EntityVisitor<'a> for Converter {
    type Output = ConvertResult<Map<String, Value>>;

    fn visit<E: Entity>(self, entity: &'a E) -> Self::Output {
        debug!(entity = %E::KIND, excluded = self.exclusions.len(), "converting entity");

        let mut node = Map::new();
        for field in E::fields() {
            if self.exclusions.contains(field.name()) {
                trace!(entity = %E::KIND, field = field.name(), "excluded");
                continue;
            }
            if let Some(value) = encode_field(E::KIND, field, entity)? {
                node.insert(field.name().to_string(), value);
            }
        }
        Ok(node)
    }
}

/// Encodes one field, or `None` when it should be left out of the object.
fn encode_field<E: Entity>(
    parent: EntityKind,
    field: &Field<E>,
    entity: &E,
) -> ConvertResult<Option<Value>> {
    let strategy = strategy_for(field.field_type());
    if strategy == Strategy::Unsupported {
        return Err(unsupported(parent, field));
    }

    let value = match (strategy, field.read(entity)) {
        (Strategy::Scalar, FieldValue::Text(text)) => text.map(|s| Value::String(s.to_string())),
        (Strategy::Scalar, FieldValue::Integer(n)) => n.map(|n| Value::Number(Number::from(n))),
        (Strategy::Scalar, FieldValue::Boolean(flag)) => flag.map(Value::Bool),
        (Strategy::Date, FieldValue::DateTime(at)) => {
            at.map(|at| Value::String(format_timestamp(&at)))
        }
        (Strategy::NestedEntity(kind), FieldValue::Entity(nested)) => match nested {
            Some(nested) => {
                let exclusions = policy_for(kind, Context::field(parent, field.name()));
                Some(Value::Object(convert_entity(nested, exclusions)?))
            }
            None => None,
        },
        (Strategy::ListOf, FieldValue::List(items)) => {
            Some(encode_list(&items, parent, field.name())?)
        }
        // Field constructors keep the declared type and accessor in step,
        // so any other pairing is a schema defect.
        _ => return Err(unsupported(parent, field)),
    };
    Ok(value)
}

fn unsupported<E>(parent: EntityKind, field: &Field<E>) -> ConvertError {
    ConvertError::UnsupportedFieldType {
        entity: parent,
        field: field.name(),
        field_type: field.field_type(),
    }
}
