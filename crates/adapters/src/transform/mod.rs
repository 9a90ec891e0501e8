use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use love_letter_application::{
    ApplicationError, ImageTransformer, TransformJob, TransformOutcome, UploadPipeline,
};
use love_letter_domain::{EncodedImage, TransformOptions};
use tracing::debug;

/// Resize + recompress through the image crate. Aspect ratio is always
/// preserved: landscape sources clamp to max_width, portrait sources to
/// max_height, and images already within bounds are only re-encoded.
#[derive(Debug, Default, Clone)]
pub struct ImageCrateTransformer;

impl ImageTransformer for ImageCrateTransformer {
    fn resize(
        &self,
        source_bytes: &[u8],
        options: &TransformOptions,
    ) -> Result<EncodedImage, ApplicationError> {
        let decoded = image::load_from_memory(source_bytes)
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        let (width, height) = (decoded.width(), decoded.height());
        if width == 0 || height == 0 {
            return Err(ApplicationError::Decode(
                "source image has empty dimensions".to_string(),
            ));
        }

        let (target_width, target_height) =
            target_dimensions(width, height, options.max_width, options.max_height);
        let resized = if (target_width, target_height) == (width, height) {
            decoded
        } else {
            decoded.resize_exact(target_width, target_height, FilterType::Triangle)
        };

        let rgb = resized.to_rgb8();
        let mut jpeg = Vec::new();
        {
            let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, options.quality);
            encoder
                .encode_image(&rgb)
                .map_err(|error| ApplicationError::Decode(error.to_string()))?;
        }

        debug!(
            source_width = width,
            source_height = height,
            target_width,
            target_height,
            jpeg_bytes = jpeg.len(),
            "transformed upload"
        );
        Ok(EncodedImage::from_jpeg_bytes(
            &jpeg,
            target_width,
            target_height,
        ))
    }
}

fn target_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width >= height {
        if width > max_width {
            let scaled = ((height as f64 * max_width as f64) / width as f64).round() as u32;
            (max_width, scaled.max(1))
        } else {
            (width, height)
        }
    } else if height > max_height {
        let scaled = ((width as f64 * max_height as f64) / height as f64).round() as u32;
        (scaled.max(1), max_height)
    } else {
        (width, height)
    }
}

/// Runs transforms on one background worker. Outcomes (successes and
/// failures alike) come back through `try_receive`; filtering stale
/// generations is the slot controller's job.
pub struct ThreadedUploadPipeline {
    submit_tx: mpsc::Sender<TransformJob>,
    result_rx: Mutex<mpsc::Receiver<TransformOutcome>>,
}

impl ThreadedUploadPipeline {
    pub fn new() -> Self {
        Self::with_transformer(Arc::new(ImageCrateTransformer))
    }

    fn with_transformer(transformer: Arc<dyn ImageTransformer + Send + Sync>) -> Self {
        let (submit_tx, submit_rx) = mpsc::channel::<TransformJob>();
        let (result_tx, result_rx) = mpsc::channel::<TransformOutcome>();

        spawn_worker(submit_rx, result_tx, transformer);

        Self {
            submit_tx,
            result_rx: Mutex::new(result_rx),
        }
    }
}

impl Default for ThreadedUploadPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadPipeline for ThreadedUploadPipeline {
    fn submit(&self, job: TransformJob) -> Result<(), ApplicationError> {
        self.submit_tx
            .send(job)
            .map_err(|error| ApplicationError::Io(format!("failed to enqueue upload: {error}")))
    }

    fn try_receive(&self) -> Result<Option<TransformOutcome>, ApplicationError> {
        let receiver = self
            .result_rx
            .lock()
            .map_err(|_| ApplicationError::Io("upload result lock poisoned".to_string()))?;

        match receiver.try_recv() {
            Ok(outcome) => Ok(Some(outcome)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(ApplicationError::Io(
                "upload result channel disconnected".to_string(),
            )),
        }
    }
}

fn spawn_worker(
    submit_rx: mpsc::Receiver<TransformJob>,
    result_tx: mpsc::Sender<TransformOutcome>,
    transformer: Arc<dyn ImageTransformer + Send + Sync>,
) {
    thread::spawn(move || {
        while let Ok(job) = submit_rx.recv() {
            let result = transformer.resize(&job.source_bytes, &job.options);
            let outcome = TransformOutcome {
                slot_id: job.slot_id,
                generation: job.generation,
                file_name: job.file_name,
                result,
            };
            if result_tx.send(outcome).is_err() {
                return;
            }
        }
    });
}
