use love_letter_domain::{EncodedImage, SlotId, TransformOptions};

#[derive(Debug, Clone, Default)]
pub struct BootstrapStoreCommand;

#[derive(Debug, Clone)]
pub struct RestoreSlotCommand {
    pub slot_id: SlotId,
}

#[derive(Debug, Clone)]
pub struct UploadPhotoCommand {
    pub slot_id: SlotId,
    pub file_name: String,
    pub source_bytes: Vec<u8>,
    pub options: TransformOptions,
}

#[derive(Debug, Clone)]
pub struct SubmitUploadCommand {
    pub slot_id: SlotId,
    pub generation: u64,
    pub file_name: String,
    pub source_bytes: Vec<u8>,
    pub options: TransformOptions,
}

#[derive(Debug, Clone, Default)]
pub struct PollUploadCommand;

#[derive(Debug, Clone)]
pub struct CommitUploadCommand {
    pub slot_id: SlotId,
    pub file_name: String,
    pub image: EncodedImage,
}

#[derive(Debug, Clone)]
pub struct DeletePhotoCommand {
    pub slot_id: SlotId,
}

#[derive(Debug, Clone)]
pub struct OpenGalleryCommand {
    pub title: String,
    pub subtitle: String,
}
