mod error;
mod ports;
mod service;
mod slots;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{
    Clock, DownloadSink, ImageTransformer, PhotoStore, TransformJob, TransformOutcome,
    UploadPipeline,
};
pub use service::{ApplicationService, UploadReceipt};
pub use slots::{SlotController, SlotPhase, PROGRESS_TICK_MS, UPLOAD_DEADLINE_MS};
pub use use_cases::{
    BootstrapStoreCommand, CommitUploadCommand, DeletePhotoCommand, OpenGalleryCommand,
    PollUploadCommand, RestoreSlotCommand, SubmitUploadCommand, UploadPhotoCommand,
};
