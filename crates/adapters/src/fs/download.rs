use std::fs;
use std::path::PathBuf;

use love_letter_application::{ApplicationError, DownloadSink};
use love_letter_domain::{EncodedImage, SlotId};
use tracing::info;

/// Writes the transformed JPEG into a local downloads folder under its
/// derived file name, standing in for the page's synthetic anchor
/// download.
#[derive(Debug, Clone)]
pub struct DownloadFolderSink {
    root: PathBuf,
}

impl DownloadFolderSink {
    pub fn new(root: String) -> Self {
        Self {
            root: PathBuf::from(root),
        }
    }
}

impl DownloadSink for DownloadFolderSink {
    fn deliver(
        &self,
        slot_id: &SlotId,
        original_name: &str,
        image: &EncodedImage,
    ) -> Result<PathBuf, ApplicationError> {
        let bytes = image.jpeg_bytes()?;
        fs::create_dir_all(&self.root).map_err(|error| ApplicationError::Io(error.to_string()))?;

        let path = self.root.join(slot_id.download_file_name(original_name));
        fs::write(&path, bytes).map_err(|error| ApplicationError::Io(error.to_string()))?;
        info!(path = %path.display(), "delivered download copy");
        Ok(path)
    }
}
