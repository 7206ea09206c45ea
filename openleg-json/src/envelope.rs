//! Root envelope: `{"<type>": <tree>}`.

use openleg_model::{EntityKind, EntityRef};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::convert::convert_entity;
use crate::error::{ConvertError, ConvertResult};
use crate::policy::{Context, policy_for};

/// A converted document: exactly one key, the lower-cased type name of the
/// root, mapping to the root's tree (or `null`).
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    key: String,
    body: Value,
}

impl Envelope {
    fn new(kind: EntityKind, body: Value) -> Self {
        Self {
            key: kind.envelope_key(),
            body,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The envelope as a single-entry JSON object.
    pub fn into_value(self) -> Value {
        let mut root = Map::new();
        root.insert(self.key, self.body);
        Value::Object(root)
    }

    pub fn to_json(&self) -> ConvertResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> ConvertResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.body)?;
        map.end()
    }
}

/// Kind under which `kind` is published. Supplementals are published as
/// their calendar.
fn published_kind(kind: EntityKind) -> EntityKind {
    match kind {
        EntityKind::Supplemental => EntityKind::Calendar,
        other => other,
    }
}

/// Converts `root` under its root-level policy and wraps it in an envelope.
///
/// A null root needs `expected` to name the envelope key. A supplemental
/// root is replaced by the calendar it belongs to.
pub fn serialize(
    root: Option<EntityRef<'_>>,
    expected: Option<EntityKind>,
) -> ConvertResult<Envelope> {
    let root = match root {
        Some(EntityRef::Supplemental(supplemental)) => {
            supplemental.calendar().map(EntityRef::Calendar)
        }
        other => other,
    };

    let Some(root) = root else {
        let kind = expected.ok_or(ConvertError::NullRootWithoutExpectedType)?;
        return Ok(Envelope::new(published_kind(kind), Value::Null));
    };

    let kind = root.kind();
    debug!(root = %kind, "serializing");
    let body = convert_entity(root, policy_for(kind, Context::Root))?;
    Ok(Envelope::new(kind, Value::Object(body)))
}

/// Fail-soft wrapper over [`serialize`] for callers that must always emit a
/// document.
///
/// A conversion failure is logged and replaced by an envelope whose body is
/// `null`; a partial tree is never returned. A null root without an
/// expected type is still an error, since no key can be chosen.
pub fn serialize_best_effort(
    root: Option<EntityRef<'_>>,
    expected: Option<EntityKind>,
) -> ConvertResult<Envelope> {
    match serialize(root, expected) {
        Err(ConvertError::NullRootWithoutExpectedType) => {
            Err(ConvertError::NullRootWithoutExpectedType)
        }
        Err(err) => {
            let kind = root
                .map(|root| root.kind())
                .or(expected)
                .map(published_kind)
                .ok_or(ConvertError::NullRootWithoutExpectedType)?;
            warn!(root = %kind, error = %err, "conversion failed, emitting empty document");
            Ok(Envelope::new(kind, Value::Null))
        }
        ok => ok,
    }
}
