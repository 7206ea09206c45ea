use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{Field, entity_items};
use crate::{Bill, Entity, EntityKind, EntityRef};

/// Stenographic record of a floor session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transcript {
    pub id: Option<String>,
    pub time_stamp: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub r#type: Option<String>,
    pub transcript_text: Option<String>,
    /// Text normalized for search indexing; never published.
    pub transcript_text_processed: Option<String>,
    pub related_bills: Vec<Bill>,
}

type TranscriptField = Field<Transcript>;

static TRANSCRIPT_FIELDS: &[TranscriptField] = &[
    TranscriptField::text("id", |t| t.id.as_deref()),
    TranscriptField::datetime("timeStamp", |t| t.time_stamp),
    TranscriptField::text("location", |t| t.location.as_deref()),
    TranscriptField::text("type", |t| t.r#type.as_deref()),
    TranscriptField::text("transcriptText", |t| t.transcript_text.as_deref()),
    TranscriptField::text("transcriptTextProcessed", |t| {
        t.transcript_text_processed.as_deref()
    }),
    TranscriptField::list("relatedBills", |t| entity_items(&t.related_bills)),
];

impl Entity for Transcript {
    const KIND: EntityKind = EntityKind::Transcript;

    fn fields() -> &'static [Field<Self>] {
        TRANSCRIPT_FIELDS
    }

    fn entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Transcript(self)
    }
}
