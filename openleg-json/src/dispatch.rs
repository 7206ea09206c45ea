use openleg_model::{EntityKind, FieldType};

/// How a field is encoded, decided from its declared type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Emitted as a JSON string, number or boolean.
    Scalar,
    /// Emitted as a formatted timestamp string.
    Date,
    /// Converted recursively under the nested policy for this kind.
    NestedEntity(EntityKind),
    /// Handed to the list encoders.
    ListOf,
    /// No encoding exists; the field must be excluded wherever it is reached.
    Unsupported,
}

/// Entity kinds that may be embedded as a single nested object. Other kinds
/// only appear as list elements or at the root.
pub const NESTABLE_KINDS: [EntityKind; 5] = [
    EntityKind::Bill,
    EntityKind::Person,
    EntityKind::Agenda,
    EntityKind::Addendum,
    EntityKind::Sequence,
];

pub fn strategy_for(field_type: FieldType) -> Strategy {
    match field_type {
        FieldType::Text | FieldType::Integer | FieldType::Boolean => Strategy::Scalar,
        FieldType::DateTime => Strategy::Date,
        FieldType::List => Strategy::ListOf,
        FieldType::Entity(
            kind @ (EntityKind::Bill
            | EntityKind::Person
            | EntityKind::Agenda
            | EntityKind::Addendum
            | EntityKind::Sequence),
        ) => Strategy::NestedEntity(kind),
        FieldType::Entity(_) => Strategy::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert_eq!(strategy_for(FieldType::Text), Strategy::Scalar);
        assert_eq!(strategy_for(FieldType::Integer), Strategy::Scalar);
        assert_eq!(strategy_for(FieldType::Boolean), Strategy::Scalar);
    }

    #[test]
    fn dates_and_lists() {
        assert_eq!(strategy_for(FieldType::DateTime), Strategy::Date);
        assert_eq!(strategy_for(FieldType::List), Strategy::ListOf);
    }

    #[test]
    fn nestable_kinds_recurse() {
        for kind in NESTABLE_KINDS {
            assert_eq!(
                strategy_for(FieldType::Entity(kind)),
                Strategy::NestedEntity(kind)
            );
        }
    }

    #[test]
    fn other_kinds_are_unsupported() {
        for kind in EntityKind::ALL
            .into_iter()
            .filter(|k| !NESTABLE_KINDS.contains(k))
        {
            assert_eq!(
                strategy_for(FieldType::Entity(kind)),
                Strategy::Unsupported,
                "{kind}"
            );
        }
    }
}
