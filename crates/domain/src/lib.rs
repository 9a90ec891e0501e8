mod error;
mod gallery;
mod photo;
mod slot;
mod toast;

pub use error::DomainError;
pub use gallery::{GallerySpec, GalleryView, GALLERY_SLOT_COUNT};
pub use photo::{
    detect_photo_kind, validate_upload, EncodedImage, PhotoKind, PhotoRecord, TransformOptions,
    MAX_UPLOAD_BYTES,
};
pub use slot::{SlotId, DOWNLOAD_PREFIX, SLOT_KEY_PREFIX};
pub use toast::{ToastMessage, ToastSeverity};
