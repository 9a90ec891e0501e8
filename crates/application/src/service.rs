use std::path::PathBuf;

use love_letter_domain::{validate_upload, GallerySpec, GalleryView, PhotoRecord};
use tracing::{info, warn};

use crate::{
    ApplicationError, BootstrapStoreCommand, Clock, CommitUploadCommand, DeletePhotoCommand,
    DownloadSink, ImageTransformer, OpenGalleryCommand, PhotoStore, PollUploadCommand,
    RestoreSlotCommand, SubmitUploadCommand, TransformJob, TransformOutcome, UploadPhotoCommand,
    UploadPipeline,
};

/// Result of a committed upload: the stored record and where the local
/// download copy landed.
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    pub record: PhotoRecord,
    pub download_path: PathBuf,
}

pub struct ApplicationService {
    store: Box<dyn PhotoStore>,
    transformer: Box<dyn ImageTransformer>,
    uploads: Box<dyn UploadPipeline>,
    downloads: Box<dyn DownloadSink>,
    clock: Box<dyn Clock>,
    galleries: GallerySpec,
}

impl ApplicationService {
    pub fn new(
        store: Box<dyn PhotoStore>,
        transformer: Box<dyn ImageTransformer>,
        uploads: Box<dyn UploadPipeline>,
        downloads: Box<dyn DownloadSink>,
        clock: Box<dyn Clock>,
        galleries: GallerySpec,
    ) -> Self {
        Self {
            store,
            transformer,
            uploads,
            downloads,
            clock,
            galleries,
        }
    }

    pub fn bootstrap_store(&self, _command: BootstrapStoreCommand) -> Result<(), ApplicationError> {
        self.store.initialize()
    }

    /// Loads whatever the store holds for a slot so it can render
    /// Displaying immediately on startup, or Empty when absent.
    pub fn restore_slot(
        &self,
        command: RestoreSlotCommand,
    ) -> Result<Option<PhotoRecord>, ApplicationError> {
        self.store.load(&command.slot_id)
    }

    /// The whole flow in one call: validate, transform, deliver the
    /// download, persist. The CLI path; the UI splits this into
    /// submit/commit.
    pub fn upload_photo(
        &self,
        command: UploadPhotoCommand,
    ) -> Result<UploadReceipt, ApplicationError> {
        validate_upload(&command.file_name, command.source_bytes.len() as u64)?;
        let image = self
            .transformer
            .resize(&command.source_bytes, &command.options)?;
        self.commit_upload(CommitUploadCommand {
            slot_id: command.slot_id,
            file_name: command.file_name,
            image,
        })
    }

    /// Validates and enqueues a transform on the background pipeline.
    /// Nothing is mutated until the outcome is committed.
    pub fn submit_upload(&self, command: SubmitUploadCommand) -> Result<(), ApplicationError> {
        validate_upload(&command.file_name, command.source_bytes.len() as u64)?;
        self.uploads.submit(TransformJob {
            slot_id: command.slot_id,
            generation: command.generation,
            file_name: command.file_name,
            source_bytes: command.source_bytes,
            options: command.options,
        })
    }

    pub fn poll_upload(
        &self,
        _command: PollUploadCommand,
    ) -> Result<Option<TransformOutcome>, ApplicationError> {
        self.uploads.try_receive()
    }

    /// Delivers the download copy and then persists the record. The store
    /// is written last; whichever step fails, the slot still holds
    /// whatever it held before, so a replace that cannot finish keeps the
    /// prior photo.
    pub fn commit_upload(
        &self,
        command: CommitUploadCommand,
    ) -> Result<UploadReceipt, ApplicationError> {
        let record = PhotoRecord {
            image_data: command.image.data_uri.clone(),
            original_name: command.file_name.clone(),
            uploaded_at: self.clock.now_timestamp_string(),
        };
        let download_path =
            self.downloads
                .deliver(&command.slot_id, &command.file_name, &command.image)?;
        self.store.save(&command.slot_id, &record)?;
        info!(
            slot = %command.slot_id,
            original = %command.file_name,
            "stored photo and delivered download copy"
        );
        Ok(UploadReceipt {
            record,
            download_path,
        })
    }

    /// Removing an absent slot is a no-op.
    pub fn delete_photo(&self, command: DeletePhotoCommand) -> Result<(), ApplicationError> {
        self.store.remove(&command.slot_id)?;
        info!(slot = %command.slot_id, "removed stored photo");
        Ok(())
    }

    pub fn open_gallery(&self, command: OpenGalleryCommand) -> Result<GalleryView, ApplicationError> {
        let view = GalleryView::from_spec(&self.galleries, &command.title, &command.subtitle);
        if view.image_count() == 0 {
            warn!(title = %command.title, "gallery has no images, rendering placeholders");
        }
        Ok(view)
    }

    pub fn gallery_titles(&self) -> Vec<String> {
        self.galleries.titles().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::Path;

    use love_letter_domain::{EncodedImage, SlotId, TransformOptions, MAX_UPLOAD_BYTES};

    use super::*;

    struct FakeStore {
        records: RefCell<HashMap<String, PhotoRecord>>,
        reject_writes: bool,
    }

    impl FakeStore {
        fn new() -> Self {
            Self {
                records: RefCell::new(HashMap::new()),
                reject_writes: false,
            }
        }

        fn rejecting() -> Self {
            Self {
                records: RefCell::new(HashMap::new()),
                reject_writes: true,
            }
        }
    }

    impl PhotoStore for FakeStore {
        fn initialize(&self) -> Result<(), ApplicationError> {
            Ok(())
        }

        fn save(&self, slot_id: &SlotId, record: &PhotoRecord) -> Result<(), ApplicationError> {
            if self.reject_writes {
                return Err(ApplicationError::Persistence("quota exceeded".to_string()));
            }
            self.records
                .borrow_mut()
                .insert(slot_id.storage_key(), record.clone());
            Ok(())
        }

        fn load(&self, slot_id: &SlotId) -> Result<Option<PhotoRecord>, ApplicationError> {
            Ok(self.records.borrow().get(&slot_id.storage_key()).cloned())
        }

        fn remove(&self, slot_id: &SlotId) -> Result<(), ApplicationError> {
            self.records.borrow_mut().remove(&slot_id.storage_key());
            Ok(())
        }
    }

    struct FakeTransformer;

    impl ImageTransformer for FakeTransformer {
        fn resize(
            &self,
            source_bytes: &[u8],
            options: &TransformOptions,
        ) -> Result<EncodedImage, ApplicationError> {
            if source_bytes.is_empty() {
                return Err(ApplicationError::Decode("empty source".to_string()));
            }
            Ok(EncodedImage::from_jpeg_bytes(
                source_bytes,
                options.max_width,
                options.max_height / 2,
            ))
        }
    }

    #[derive(Default)]
    struct FakePipeline {
        submitted: RefCell<Vec<TransformJob>>,
        outcomes: RefCell<Vec<TransformOutcome>>,
    }

    impl UploadPipeline for FakePipeline {
        fn submit(&self, job: TransformJob) -> Result<(), ApplicationError> {
            self.submitted.borrow_mut().push(job);
            Ok(())
        }

        fn try_receive(&self) -> Result<Option<TransformOutcome>, ApplicationError> {
            Ok(self.outcomes.borrow_mut().pop())
        }
    }

    #[derive(Default)]
    struct FakeDownloads {
        delivered: RefCell<Vec<String>>,
        reject_deliveries: bool,
    }

    impl FakeDownloads {
        fn rejecting() -> Self {
            Self {
                delivered: RefCell::new(Vec::new()),
                reject_deliveries: true,
            }
        }
    }

    impl DownloadSink for FakeDownloads {
        fn deliver(
            &self,
            slot_id: &SlotId,
            original_name: &str,
            _image: &EncodedImage,
        ) -> Result<PathBuf, ApplicationError> {
            if self.reject_deliveries {
                return Err(ApplicationError::Io("disk full".to_string()));
            }
            let name = slot_id.download_file_name(original_name);
            self.delivered.borrow_mut().push(name.clone());
            Ok(Path::new("/downloads").join(name))
        }
    }

    struct FakeClock;

    impl Clock for FakeClock {
        fn now_timestamp_string(&self) -> String {
            "2026-08-25T12:00:00Z".to_string()
        }
    }

    fn galleries() -> GallerySpec {
        GallerySpec::new(vec![(
            "Adventures".to_string(),
            vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()],
        )])
    }

    fn service_with(store: FakeStore) -> ApplicationService {
        ApplicationService::new(
            Box::new(store),
            Box::new(FakeTransformer),
            Box::<FakePipeline>::default(),
            Box::<FakeDownloads>::default(),
            Box::new(FakeClock),
            galleries(),
        )
    }

    fn slot(id: &str) -> SlotId {
        SlotId::new(id).expect("slot id")
    }

    #[test]
    fn upload_then_restore_round_trips() {
        let service = service_with(FakeStore::new());

        let receipt = service
            .upload_photo(UploadPhotoCommand {
                slot_id: slot("photo-1"),
                file_name: "beach.png".to_string(),
                source_bytes: vec![1, 2, 3],
                options: TransformOptions::default(),
            })
            .expect("upload should work");

        assert_eq!(receipt.record.original_name, "beach.png");
        assert_eq!(receipt.record.uploaded_at, "2026-08-25T12:00:00Z");
        assert_eq!(
            receipt.download_path,
            Path::new("/downloads/love-letter-photo-1-beach.png")
        );

        let restored = service
            .restore_slot(RestoreSlotCommand {
                slot_id: slot("photo-1"),
            })
            .expect("restore should work")
            .expect("record exists");
        assert_eq!(restored.original_name, "beach.png");
        assert!(EncodedImage::decode_data_uri(&restored.image_data).is_ok());
    }

    #[test]
    fn rejected_upload_leaves_store_untouched() {
        let service = service_with(FakeStore::new());

        let oversized = service.upload_photo(UploadPhotoCommand {
            slot_id: slot("photo-1"),
            file_name: "beach.png".to_string(),
            source_bytes: vec![0; (MAX_UPLOAD_BYTES + 1) as usize],
            options: TransformOptions::default(),
        });
        assert!(matches!(oversized, Err(ApplicationError::Domain(_))));

        let wrong_type = service.upload_photo(UploadPhotoCommand {
            slot_id: slot("photo-1"),
            file_name: "notes.txt".to_string(),
            source_bytes: vec![1],
            options: TransformOptions::default(),
        });
        assert!(matches!(wrong_type, Err(ApplicationError::Domain(_))));

        let restored = service
            .restore_slot(RestoreSlotCommand {
                slot_id: slot("photo-1"),
            })
            .expect("restore should work");
        assert!(restored.is_none());
    }

    #[test]
    fn failed_store_write_surfaces_and_preserves_prior() {
        let store = FakeStore::new();
        store
            .save(
                &slot("photo-1"),
                &PhotoRecord {
                    image_data: EncodedImage::from_jpeg_bytes(&[9], 1, 1).data_uri,
                    original_name: "old.jpg".to_string(),
                    uploaded_at: "2026-01-01T00:00:00Z".to_string(),
                },
            )
            .expect("seed prior record");
        let rejecting = FakeStore {
            records: RefCell::new(store.records.borrow().clone()),
            ..FakeStore::rejecting()
        };
        let service = service_with(rejecting);

        let result = service.upload_photo(UploadPhotoCommand {
            slot_id: slot("photo-1"),
            file_name: "new.png".to_string(),
            source_bytes: vec![1, 2],
            options: TransformOptions::default(),
        });
        assert!(matches!(result, Err(ApplicationError::Persistence(_))));

        let prior = service
            .restore_slot(RestoreSlotCommand {
                slot_id: slot("photo-1"),
            })
            .expect("restore should work")
            .expect("prior record survives");
        assert_eq!(prior.original_name, "old.jpg");
    }

    #[test]
    fn failed_download_delivery_leaves_store_untouched() {
        let store = FakeStore::new();
        store
            .save(
                &slot("photo-1"),
                &PhotoRecord {
                    image_data: EncodedImage::from_jpeg_bytes(&[9], 1, 1).data_uri,
                    original_name: "old.jpg".to_string(),
                    uploaded_at: "2026-01-01T00:00:00Z".to_string(),
                },
            )
            .expect("seed prior record");
        let service = ApplicationService::new(
            Box::new(store),
            Box::new(FakeTransformer),
            Box::<FakePipeline>::default(),
            Box::new(FakeDownloads::rejecting()),
            Box::new(FakeClock),
            galleries(),
        );

        let result = service.upload_photo(UploadPhotoCommand {
            slot_id: slot("photo-1"),
            file_name: "new.png".to_string(),
            source_bytes: vec![1, 2],
            options: TransformOptions::default(),
        });
        assert!(matches!(result, Err(ApplicationError::Io(_))));

        let prior = service
            .restore_slot(RestoreSlotCommand {
                slot_id: slot("photo-1"),
            })
            .expect("restore should work")
            .expect("prior record survives");
        assert_eq!(prior.original_name, "old.jpg");
    }

    #[test]
    fn delete_is_idempotent() {
        let service = service_with(FakeStore::new());

        service
            .delete_photo(DeletePhotoCommand {
                slot_id: slot("photo-1"),
            })
            .expect("deleting an absent slot is a no-op");

        service
            .upload_photo(UploadPhotoCommand {
                slot_id: slot("photo-1"),
                file_name: "beach.png".to_string(),
                source_bytes: vec![1],
                options: TransformOptions::default(),
            })
            .expect("upload should work");
        service
            .delete_photo(DeletePhotoCommand {
                slot_id: slot("photo-1"),
            })
            .expect("delete should work");

        let restored = service
            .restore_slot(RestoreSlotCommand {
                slot_id: slot("photo-1"),
            })
            .expect("restore should work");
        assert!(restored.is_none());
    }

    #[test]
    fn submit_upload_validates_before_enqueueing() {
        let pipeline = FakePipeline::default();
        let service = ApplicationService::new(
            Box::new(FakeStore::new()),
            Box::new(FakeTransformer),
            Box::new(pipeline),
            Box::<FakeDownloads>::default(),
            Box::new(FakeClock),
            galleries(),
        );

        let rejected = service.submit_upload(SubmitUploadCommand {
            slot_id: slot("photo-1"),
            generation: 1,
            file_name: "notes.txt".to_string(),
            source_bytes: vec![1],
            options: TransformOptions::default(),
        });
        assert!(matches!(rejected, Err(ApplicationError::Domain(_))));

        service
            .submit_upload(SubmitUploadCommand {
                slot_id: slot("photo-1"),
                generation: 1,
                file_name: "beach.png".to_string(),
                source_bytes: vec![1, 2, 3],
                options: TransformOptions::default(),
            })
            .expect("valid submit should enqueue");
    }

    #[test]
    fn open_gallery_known_and_unknown_titles() {
        let service = service_with(FakeStore::new());

        let known = service
            .open_gallery(OpenGalleryCommand {
                title: "Adventures".to_string(),
                subtitle: "the two of us".to_string(),
            })
            .expect("open should work");
        assert_eq!(known.image_count(), 3);
        assert_eq!(known.tiles[0].as_deref(), Some("a.jpg"));
        assert_eq!(known.tiles[2].as_deref(), Some("c.jpg"));

        let unknown = service
            .open_gallery(OpenGalleryCommand {
                title: "Missing".to_string(),
                subtitle: String::new(),
            })
            .expect("unknown title must not error");
        assert_eq!(unknown.image_count(), 0);
    }
}
