mod clock;
mod download;

pub use clock::SystemClock;
pub use download::DownloadFolderSink;
