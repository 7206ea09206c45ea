//! List encoders and the first-element sniff that selects them.
//!
//! A list field's accessor erases its element type, so the encoder is
//! picked from the runtime type of the first element among those
//! registered for the declaring (kind, field).

use openleg_model::EntityKind::*;
use openleg_model::{ElementKind, EntityKind, Item};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::convert::convert_entity;
use crate::error::{ConvertError, ConvertResult};
use crate::policy::{Context, policy_for};

/// Encoder for one element type of one list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEncoder {
    pub declaring: EntityKind,
    pub field: &'static str,
    pub element: ElementKind,
}

impl ListEncoder {
    const fn entities(declaring: EntityKind, field: &'static str, element: EntityKind) -> Self {
        Self {
            declaring,
            field,
            element: ElementKind::Entity(element),
        }
    }

    const fn text(declaring: EntityKind, field: &'static str) -> Self {
        Self {
            declaring,
            field,
            element: ElementKind::Text,
        }
    }

    /// Context under which entity elements of this list are converted.
    pub const fn context(&self) -> Context {
        Context::field(self.declaring, self.field)
    }

    fn encode(&self, index: usize, item: &Item<'_>) -> ConvertResult<Value> {
        let element = item.element_kind();
        if element != self.element {
            return Err(self.unrecognized(element, index));
        }

        match item {
            Item::Text(text) => Ok(Value::String((*text).to_string())),
            Item::Entity(entity) => {
                let exclusions = policy_for(entity.kind(), self.context());
                convert_entity(*entity, exclusions).map(Value::Object)
            }
        }
    }

    fn unrecognized(&self, element: ElementKind, index: usize) -> ConvertError {
        ConvertError::UnrecognizedListElementType {
            entity: self.declaring,
            field: self.field,
            element,
            index,
        }
    }
}

static LIST_ENCODERS: &[ListEncoder] = &[
    ListEncoder::entities(Bill, "coSponsors", Person),
    ListEncoder::entities(Bill, "multiSponsors", Person),
    ListEncoder::text(Bill, "previousVersions"),
    ListEncoder::entities(Bill, "amendments", Bill),
    ListEncoder::entities(Bill, "billEvents", BillEvent),
    ListEncoder::entities(Bill, "votes", Vote),
    ListEncoder::text(Vote, "ayes"),
    ListEncoder::text(Vote, "nays"),
    ListEncoder::text(Vote, "abstains"),
    ListEncoder::text(Vote, "excused"),
    ListEncoder::text(Vote, "absent"),
    ListEncoder::text(Vote, "ayeWithoutRecord"),
    ListEncoder::entities(Meeting, "bills", Bill),
    ListEncoder::entities(Meeting, "votes", Vote),
    ListEncoder::entities(Meeting, "addendums", Addendum),
    ListEncoder::entities(Committee, "members", Person),
    ListEncoder::entities(Agenda, "addendums", Addendum),
    ListEncoder::entities(Addendum, "meetings", Meeting),
    ListEncoder::entities(Calendar, "supplementals", Supplemental),
    ListEncoder::entities(Supplemental, "sections", Section),
    ListEncoder::entities(Section, "calendarEntries", CalendarEntry),
    ListEncoder::entities(Sequence, "calendarEntries", CalendarEntry),
    ListEncoder::entities(Transcript, "relatedBills", Bill),
];

static BY_FIELD: LazyLock<HashMap<(EntityKind, &'static str), Vec<ListEncoder>>> =
    LazyLock::new(|| {
        let mut by_field: HashMap<_, Vec<ListEncoder>> = HashMap::new();
        for encoder in LIST_ENCODERS {
            by_field
                .entry((encoder.declaring, encoder.field))
                .or_default()
                .push(*encoder);
        }
        by_field
    });

/// Every registered list encoder, in declaration order.
pub fn list_encoders() -> &'static [ListEncoder] {
    LIST_ENCODERS
}

/// The encoder registered for `declaring.field` holding `element`s.
pub fn encoder_for(
    declaring: EntityKind,
    field: &'static str,
    element: ElementKind,
) -> Option<&'static ListEncoder> {
    BY_FIELD
        .get(&(declaring, field))?
        .iter()
        .find(|encoder| encoder.element == element)
}

/// Encodes the list `declaring.field`. Empty lists encode to `[]` without
/// consulting any encoder.
///
/// The first element selects the encoder; every later element must have
/// the same runtime type.
pub(crate) fn encode_list(
    items: &[Item<'_>],
    declaring: EntityKind,
    field: &'static str,
) -> ConvertResult<Value> {
    let Some(first) = items.first() else {
        return Ok(Value::Array(Vec::new()));
    };

    let element = first.element_kind();
    let encoder = encoder_for(declaring, field, element).ok_or_else(|| {
        ConvertError::UnrecognizedListElementType {
            entity: declaring,
            field,
            element,
            index: 0,
        }
    })?;
    debug!(list = %encoder.context(), %element, len = items.len(), "encoding list");

    items
        .iter()
        .enumerate()
        .map(|(index, item)| encoder.encode(index, item))
        .collect::<ConvertResult<Vec<_>>>()
        .map(Value::Array)
}
