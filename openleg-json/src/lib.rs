//! JSON API conversion for OpenLeg entities.
//!
//! Turns an entity graph from [`openleg_model`] into a JSON tree:
//! - [`serialize`]: wraps a root entity in a single-key [`Envelope`]
//! - [`convert`]: converts one entity under an explicit [`ExclusionSet`]
//! - [`PolicyRegistry`]: which fields each (kind, [`Context`]) pair drops
//! - [`strategy_for`]: how a declared field type is encoded
//! - [`list_encoders`]: which element types each list field accepts
//!
//! Conversion is synchronous, reads entities only through their registered
//! schema, and either produces the whole tree or fails with a
//! [`ConvertError`]. The policy and encoder tables are immutable statics,
//! so concurrent conversions share nothing mutable.

mod convert;
mod dispatch;
mod envelope;
mod error;
mod list;
mod policy;
mod timestamp;

pub use convert::convert;
pub use dispatch::{NESTABLE_KINDS, Strategy, strategy_for};
pub use envelope::{Envelope, serialize, serialize_best_effort};
pub use error::{ConvertError, ConvertResult};
pub use list::{ListEncoder, encoder_for, list_encoders};
pub use policy::{Context, ExclusionSet, Policy, PolicyRegistry, policy_for};
pub use timestamp::{TIMESTAMP_FORMAT, format_timestamp};

/// A node of the output tree: object, array, scalar or null.
pub type OutputNode = serde_json::Value;
