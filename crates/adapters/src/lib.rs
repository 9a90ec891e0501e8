pub mod fs;
pub mod migrations;
pub mod presenters;
pub mod sqlite;
pub mod transform;

pub use fs::{DownloadFolderSink, SystemClock};
pub use presenters::{present_gallery, present_receipt, present_record};
pub use sqlite::SqlitePhotoStore;
pub use transform::{ImageCrateTransformer, ThreadedUploadPipeline};
