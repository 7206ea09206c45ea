//! Renders OpenLeg entity fixtures as JSON API documents.
//!
//! A fixture is a JSON object in the entity's own camelCase shape (or
//! `null`), deserialized as the requested [`EntityKind`] and passed through
//! [`openleg_json::serialize`].

use std::{fs, path::Path};

use anyhow::{Context, Result};
use openleg_json::{serialize, serialize_best_effort};
use openleg_model::{AnyEntity, EntityKind};
use serde_json::Value;
use tracing::{debug, info};

/// How a fixture is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indent the output.
    pub pretty: bool,
    /// Emit a null-bodied document instead of failing on conversion errors.
    pub best_effort: bool,
}

/// Renders the fixture text `json` as a document rooted at `kind`.
pub fn render(kind: EntityKind, json: &str, options: &RenderOptions) -> Result<String> {
    let value: Value = serde_json::from_str(json).context("fixture is not valid JSON")?;

    let entity = if value.is_null() {
        None
    } else {
        let entity = AnyEntity::from_json(kind, value)
            .with_context(|| format!("fixture is not a valid {kind}"))?;
        Some(entity)
    };
    let root = entity.as_ref().map(AnyEntity::entity_ref);
    info!(root = %kind, null = root.is_none(), "rendering");

    let envelope = if options.best_effort {
        serialize_best_effort(root, Some(kind))
    } else {
        serialize(root, Some(kind))
    }
    .with_context(|| format!("failed to convert {kind}"))?;

    let rendered = if options.pretty {
        envelope.to_json_pretty()?
    } else {
        envelope.to_json()?
    };
    Ok(rendered)
}

/// Reads the fixture at `path` and renders it.
pub fn render_file(path: &Path, kind: EntityKind, options: &RenderOptions) -> Result<String> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    debug!(path = %path.display(), bytes = json.len(), "read fixture");
    render(kind, &json, options)
}
