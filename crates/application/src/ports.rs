use std::path::PathBuf;

use love_letter_domain::{EncodedImage, PhotoRecord, SlotId, TransformOptions};

use crate::ApplicationError;

/// Durable key-value store for slot records. `save` is a full replace;
/// `load` treats a corrupt record as absent; `remove` is idempotent.
pub trait PhotoStore {
    fn initialize(&self) -> Result<(), ApplicationError>;

    fn save(&self, slot_id: &SlotId, record: &PhotoRecord) -> Result<(), ApplicationError>;

    fn load(&self, slot_id: &SlotId) -> Result<Option<PhotoRecord>, ApplicationError>;

    fn remove(&self, slot_id: &SlotId) -> Result<(), ApplicationError>;
}

/// One-shot resize + re-encode. Never upscales; decode failure is an
/// error, never a silent empty result.
pub trait ImageTransformer {
    fn resize(
        &self,
        source_bytes: &[u8],
        options: &TransformOptions,
    ) -> Result<EncodedImage, ApplicationError>;
}

/// A transform scheduled off the caller's thread. The generation lets the
/// controlling slot abandon an upload: outcomes whose generation no
/// longer matches are discarded instead of written into the slot.
#[derive(Debug, Clone)]
pub struct TransformJob {
    pub slot_id: SlotId,
    pub generation: u64,
    pub file_name: String,
    pub source_bytes: Vec<u8>,
    pub options: TransformOptions,
}

#[derive(Debug)]
pub struct TransformOutcome {
    pub slot_id: SlotId,
    pub generation: u64,
    pub file_name: String,
    pub result: Result<EncodedImage, ApplicationError>,
}

pub trait UploadPipeline {
    fn submit(&self, job: TransformJob) -> Result<(), ApplicationError>;

    fn try_receive(&self) -> Result<Option<TransformOutcome>, ApplicationError>;
}

/// Writes the local copy of a stored upload under its derived file name.
pub trait DownloadSink {
    fn deliver(
        &self,
        slot_id: &SlotId,
        original_name: &str,
        image: &EncodedImage,
    ) -> Result<PathBuf, ApplicationError>;
}

pub trait Clock {
    fn now_timestamp_string(&self) -> String;
}
