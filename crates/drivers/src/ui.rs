use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

use eframe::egui;
use love_letter_application::{
    ApplicationError, ApplicationService, CommitUploadCommand, DeletePhotoCommand,
    OpenGalleryCommand, PollUploadCommand, RestoreSlotCommand, SlotController, SlotPhase,
    SubmitUploadCommand, PROGRESS_TICK_MS,
};
use love_letter_domain::{
    detect_photo_kind, validate_upload, GalleryView, PhotoKind, SlotId, ToastMessage,
    ToastSeverity, TransformOptions,
};
use tracing::warn;

use crate::config::AppConfig;

const WINDOW_SIZE: [f32; 2] = [1040.0, 760.0];
const SLOT_TILE: f32 = 260.0;
const SLOTS_PER_ROW: usize = 3;
const GALLERY_TILE: f32 = 150.0;
const GALLERY_COLUMNS: usize = 3;
const TOAST_DISPLAY: Duration = Duration::from_secs(3);
const TOAST_EXIT_GRACE: Duration = Duration::from_millis(300);
const TOAST_HEIGHT: f32 = 48.0;

pub fn launch_window(service: ApplicationService, config: AppConfig) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "love-letter",
        options,
        Box::new(move |_cc| {
            let app = LoveLetterApp::new(service, config)
                .map_err(|error| -> Box<dyn std::error::Error + Send + Sync> { error.into() })?;
            Ok(Box::new(app) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}

/// Transient messages, newest on top. Concurrent toasts stack; there is
/// no cap and no queue.
pub struct ToastStack {
    toasts: Vec<(ToastMessage, Instant)>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    pub fn push(&mut self, message: ToastMessage, now: Instant) {
        self.toasts.push((message, now));
    }

    /// Drops toasts whose display window plus exit grace has elapsed.
    pub fn prune(&mut self, now: Instant) {
        self.toasts
            .retain(|(_, shown_at)| now < *shown_at + TOAST_DISPLAY + TOAST_EXIT_GRACE);
    }

    /// Visible toasts with a flag for the exit-animation window.
    pub fn iter(&self, now: Instant) -> impl Iterator<Item = (&ToastMessage, bool)> {
        self.toasts.iter().map(move |(message, shown_at)| {
            let fading = now >= *shown_at + TOAST_DISPLAY;
            (message, fading)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullImage {
    pub source: String,
    pub alt: String,
}

/// Modal gallery state. All of it is explicit struct state handed to
/// `open`/`close`/`view_full_image`; there is no process-wide current
/// gallery.
pub struct GalleryViewer {
    active: Option<GalleryView>,
    full_image: Option<FullImage>,
}

impl GalleryViewer {
    pub fn new() -> Self {
        Self {
            active: None,
            full_image: None,
        }
    }

    pub fn open(&mut self, view: GalleryView) {
        self.active = Some(view);
        self.full_image = None;
    }

    pub fn close(&mut self) {
        self.active = None;
        self.full_image = None;
    }

    pub fn view_full_image(&mut self, source: String, alt: String) {
        self.full_image = Some(FullImage { source, alt });
    }

    pub fn dismiss_full_image(&mut self) {
        self.full_image = None;
    }

    pub fn active(&self) -> Option<&GalleryView> {
        self.active.as_ref()
    }

    pub fn full_image(&self) -> Option<&FullImage> {
        self.full_image.as_ref()
    }
}

impl Default for GalleryViewer {
    fn default() -> Self {
        Self::new()
    }
}

enum SlotAction {
    PickFile(usize),
    ConfirmDelete(usize),
}

struct LoveLetterApp {
    service: ApplicationService,
    config: AppConfig,
    slots: Vec<SlotController>,
    toasts: ToastStack,
    gallery: GalleryViewer,
    textures: HashMap<String, Option<egui::TextureHandle>>,
    pending_delete: Option<usize>,
    started: Instant,
}

impl LoveLetterApp {
    fn new(service: ApplicationService, config: AppConfig) -> Result<Self, ApplicationError> {
        let mut slots = Vec::with_capacity(config.slot_ids.len());
        for id in &config.slot_ids {
            let slot_id = SlotId::new(id)?;
            let mut controller = SlotController::new(slot_id.clone());
            controller.restore(service.restore_slot(RestoreSlotCommand { slot_id })?);
            slots.push(controller);
        }

        Ok(Self {
            service,
            config,
            slots,
            toasts: ToastStack::new(),
            gallery: GalleryViewer::new(),
            textures: HashMap::new(),
            pending_delete: None,
            started: Instant::now(),
        })
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn toast(&mut self, message: ToastMessage) {
        self.toasts.push(message, Instant::now());
    }

    /// Kicks off an upload for a chosen or dropped file. Validation runs
    /// before any slot transition; a bad file leaves the slot exactly as
    /// it was. Non-image drops are ignored without feedback.
    fn start_upload(&mut self, index: usize, path: &Path, from_drop: bool) {
        if from_drop && detect_photo_kind(path) == PhotoKind::Unsupported {
            return;
        }

        let Some(file_name) = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
        else {
            return;
        };

        let source_bytes = match load_upload_bytes(path, &file_name) {
            Ok(bytes) => bytes,
            Err(text) => {
                self.toast(ToastMessage::error(text));
                return;
            }
        };

        let now_ms = self.now_ms();
        let generation = self.slots[index].begin_upload(&file_name, now_ms);
        let slot_id = self.slots[index].slot_id().clone();
        if let Err(error) = self.service.submit_upload(SubmitUploadCommand {
            slot_id,
            generation,
            file_name,
            source_bytes,
            options: TransformOptions::default(),
        }) {
            self.slots[index].fail();
            self.toast(ToastMessage::error(format!("Upload failed: {error}")));
        }
    }

    /// Drains finished transforms. Outcomes from abandoned uploads carry
    /// a stale generation and are dropped here.
    fn poll_outcomes(&mut self) {
        loop {
            let outcome = match self.service.poll_upload(PollUploadCommand) {
                Ok(Some(outcome)) => outcome,
                Ok(None) => break,
                Err(error) => {
                    warn!(%error, "upload pipeline poll failed");
                    break;
                }
            };

            let Some(index) = self
                .slots
                .iter()
                .position(|slot| slot.slot_id() == &outcome.slot_id)
            else {
                continue;
            };
            if !self.slots[index].accepts(outcome.generation) {
                continue;
            }

            match outcome.result {
                Ok(image) => {
                    let committed = self.service.commit_upload(CommitUploadCommand {
                        slot_id: outcome.slot_id.clone(),
                        file_name: outcome.file_name.clone(),
                        image,
                    });
                    match committed {
                        Ok(receipt) => {
                            let text = format!(
                                "Saved {} (a copy is in {})",
                                receipt.record.original_name,
                                receipt.download_path.display()
                            );
                            self.slots[index].complete(receipt.record);
                            self.toast(ToastMessage::success(text));
                        }
                        Err(error) => {
                            self.slots[index].fail();
                            self.toast(ToastMessage::error(format!(
                                "Could not save the photo: {error}"
                            )));
                        }
                    }
                }
                Err(error) => {
                    self.slots[index].fail();
                    self.toast(ToastMessage::error(format!(
                        "That photo could not be processed: {error}"
                    )));
                }
            }
        }
    }

    /// Advances progress animations and abandons uploads that blew the
    /// deadline, so the indicator always goes away.
    fn tick_slots(&mut self) {
        let now_ms = self.now_ms();
        for index in 0..self.slots.len() {
            if self.slots[index].tick(now_ms) {
                self.slots[index].cancel();
                let slot = self.slots[index].slot_id().clone();
                self.toast(ToastMessage::error(format!(
                    "Upload for {slot} took too long and was abandoned"
                )));
            }
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context, slot_rects: &[(usize, egui::Rect)]) {
        let dropped = ctx.input(|input| input.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        let Some(position) = ctx.input(|input| input.pointer.latest_pos()) else {
            return;
        };
        let Some(&(index, _)) = slot_rects.iter().find(|(_, rect)| rect.contains(position)) else {
            return;
        };
        if let Some(path) = dropped
            .first()
            .and_then(|file| file.path.clone())
        {
            self.start_upload(index, &path, true);
        }
    }

    fn pick_file(&mut self, index: usize) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
            .pick_file()
        {
            self.start_upload(index, &path, false);
        }
    }

    fn slot_texture(&mut self, ctx: &egui::Context, index: usize) -> Option<egui::TextureHandle> {
        let record = self.slots[index].record()?.clone();
        let key = format!("slot:{}:{}", self.slots[index].slot_id(), record.uploaded_at);
        ensure_texture(&mut self.textures, ctx, key, || {
            let bytes = love_letter_domain::EncodedImage::decode_data_uri(&record.image_data).ok()?;
            color_image_from_bytes(&bytes)
        })
    }

    fn gallery_texture(
        &mut self,
        ctx: &egui::Context,
        file_name: &str,
    ) -> Option<egui::TextureHandle> {
        let path = Path::new(&self.config.gallery_dir).join(file_name);
        let key = format!("gallery:{}", path.display());
        ensure_texture(&mut self.textures, ctx, key, || {
            let bytes = std::fs::read(&path).ok()?;
            color_image_from_bytes(&bytes)
        })
    }

    fn render_slot(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, index: usize) -> egui::Rect {
        let mut action = None;
        let tile = egui::vec2(SLOT_TILE, SLOT_TILE + 36.0);

        let response = ui
            .allocate_ui(tile, |ui| {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_min_size(tile);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(self.slots[index].slot_id().as_str()).small(),
                        );
                        match self.slots[index].phase().clone() {
                            SlotPhase::Empty => {
                                ui.add_space(SLOT_TILE * 0.35);
                                if ui.button("Add a memory").clicked() {
                                    action = Some(SlotAction::PickFile(index));
                                }
                                ui.label(egui::RichText::new("or drop a photo here").weak());
                            }
                            SlotPhase::Uploading {
                                file_name,
                                progress,
                                ..
                            } => {
                                ui.add_space(SLOT_TILE * 0.3);
                                ui.spinner();
                                ui.label(file_name);
                                ui.add(
                                    egui::ProgressBar::new(f32::from(progress) / 100.0)
                                        .show_percentage(),
                                );
                            }
                            SlotPhase::Displaying { record } => {
                                if let Some(texture) = self.slot_texture(ctx, index) {
                                    ui.add(
                                        egui::Image::new(&texture)
                                            .max_size(egui::vec2(SLOT_TILE, SLOT_TILE - 60.0)),
                                    );
                                } else {
                                    ui.label("(photo unavailable)");
                                }
                                ui.label(egui::RichText::new(record.original_name).weak());
                                ui.horizontal(|ui| {
                                    if ui.button("Replace").clicked() {
                                        action = Some(SlotAction::PickFile(index));
                                    }
                                    if ui.button("Delete").clicked() {
                                        action = Some(SlotAction::ConfirmDelete(index));
                                    }
                                });
                            }
                        }
                    });
                });
            })
            .response;

        match action {
            Some(SlotAction::PickFile(index)) => self.pick_file(index),
            Some(SlotAction::ConfirmDelete(index)) => self.pending_delete = Some(index),
            None => {}
        }

        response.rect
    }

    fn render_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(index) = self.pending_delete else {
            return;
        };
        let slot_id = self.slots[index].slot_id().clone();

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Remove this memory?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("The photo in {slot_id} will be removed."));
                ui.horizontal(|ui| {
                    if ui.button("Remove").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Keep it").clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            match self.service.delete_photo(DeletePhotoCommand {
                slot_id: slot_id.clone(),
            }) {
                Ok(()) => {
                    self.slots[index].delete();
                    self.toast(ToastMessage::info(format!("Removed the photo in {slot_id}")));
                }
                Err(error) => {
                    self.toast(ToastMessage::error(format!("Could not remove it: {error}")));
                }
            }
            self.pending_delete = None;
        } else if cancelled {
            self.pending_delete = None;
        }
    }

    fn render_gallery(&mut self, ctx: &egui::Context) {
        if self.gallery.full_image().is_some() {
            self.render_full_image(ctx);
            return;
        }

        let Some(view) = self.gallery.active().cloned() else {
            return;
        };

        let mut close = false;
        let mut open_tile: Option<(String, String)> = None;
        egui::Window::new(view.title.clone())
            .id(egui::Id::new("gallery-modal"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                if !view.subtitle.is_empty() {
                    ui.label(egui::RichText::new(view.subtitle.clone()).italics());
                }
                ui.add_space(6.0);

                for row in view.tiles.chunks(GALLERY_COLUMNS) {
                    ui.horizontal(|ui| {
                        for tile in row {
                            match tile {
                                Some(file_name) => {
                                    let texture = self.gallery_texture(ctx, file_name);
                                    if let Some(texture) = texture {
                                        let response = ui.add(
                                            egui::Image::new(&texture)
                                                .max_size(egui::vec2(GALLERY_TILE, GALLERY_TILE))
                                                .sense(egui::Sense::click()),
                                        );
                                        if response.clicked() {
                                            open_tile = Some((
                                                file_name.clone(),
                                                file_name.clone(),
                                            ));
                                        }
                                    } else {
                                        placeholder_tile(ui, GALLERY_TILE);
                                    }
                                }
                                None => placeholder_tile(ui, GALLERY_TILE),
                            }
                        }
                    });
                }

                ui.add_space(6.0);
                if ui.button("Close").clicked() {
                    close = true;
                }
            });

        if ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
            close = true;
        }

        if let Some((source, alt)) = open_tile {
            self.gallery.view_full_image(source, alt);
        } else if close {
            self.gallery.close();
        }
    }

    fn render_full_image(&mut self, ctx: &egui::Context) {
        let Some(full) = self.gallery.full_image().cloned() else {
            return;
        };

        let screen = ctx.screen_rect();
        let mut dismiss = false;
        egui::Area::new(egui::Id::new("full-image-overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(220));
                let background = ui.allocate_rect(screen, egui::Sense::click());

                let image_rect = screen.shrink(60.0);
                if let Some(texture) = self.gallery_texture(ctx, &full.source) {
                    ui.put(
                        image_rect,
                        egui::Image::new(&texture)
                            .max_size(image_rect.size())
                            .sense(egui::Sense::click()),
                    );
                } else {
                    ui.put(
                        image_rect,
                        egui::Label::new(
                            egui::RichText::new(full.alt.clone())
                                .color(egui::Color32::WHITE),
                        ),
                    );
                }

                let close_rect = egui::Rect::from_min_size(
                    egui::pos2(screen.max.x - 48.0, screen.min.y + 16.0),
                    egui::vec2(32.0, 32.0),
                );
                if ui.put(close_rect, egui::Button::new("X")).clicked() {
                    dismiss = true;
                }

                if background.clicked() {
                    dismiss = true;
                }
            });

        // Each open checks the cancel key itself; nothing lingers once
        // the overlay is gone.
        if ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
            dismiss = true;
        }

        if dismiss {
            self.gallery.dismiss_full_image();
        }
    }

    fn render_toasts(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.toasts.prune(now);

        let mut offset = -16.0;
        for (index, (message, fading)) in self.toasts.iter(now).enumerate() {
            let fill = match (message.severity, fading) {
                (ToastSeverity::Success, false) => egui::Color32::from_rgb(40, 90, 50),
                (ToastSeverity::Success, true) => egui::Color32::from_rgb(30, 60, 38),
                (ToastSeverity::Error, false) => egui::Color32::from_rgb(110, 40, 40),
                (ToastSeverity::Error, true) => egui::Color32::from_rgb(70, 30, 30),
                (ToastSeverity::Info, false) => egui::Color32::from_rgb(45, 55, 80),
                (ToastSeverity::Info, true) => egui::Color32::from_rgb(35, 42, 60),
            };
            egui::Area::new(egui::Id::new(("toast", index)))
                .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, offset])
                .order(egui::Order::Tooltip)
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&message.text).color(egui::Color32::WHITE),
                        );
                    });
                });
            offset -= TOAST_HEIGHT;
        }
    }
}

impl eframe::App for LoveLetterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_outcomes();
        self.tick_slots();

        let titles = self.service.gallery_titles();
        let mut open_gallery: Option<String> = None;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("love-letter");
                ui.separator();
                for title in &titles {
                    if ui.button(title).clicked() {
                        open_gallery = Some(title.clone());
                    }
                }
            });
        });

        if let Some(title) = open_gallery {
            match self.service.open_gallery(OpenGalleryCommand {
                title: title.clone(),
                subtitle: "a few favourites".to_string(),
            }) {
                Ok(view) => self.gallery.open(view),
                Err(error) => self.toast(ToastMessage::error(format!(
                    "Could not open {title}: {error}"
                ))),
            }
        }

        let mut slot_rects: Vec<(usize, egui::Rect)> = Vec::with_capacity(self.slots.len());
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Six little frames for the moments worth keeping.").weak(),
            );
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                let count = self.slots.len();
                for row_start in (0..count).step_by(SLOTS_PER_ROW) {
                    ui.horizontal(|ui| {
                        for index in row_start..(row_start + SLOTS_PER_ROW).min(count) {
                            let rect = self.render_slot(ui, ctx, index);
                            slot_rects.push((index, rect));
                        }
                    });
                    ui.add_space(8.0);
                }
            });
        });

        self.handle_dropped_files(ctx, &slot_rects);
        self.render_delete_confirmation(ctx);
        self.render_gallery(ctx);
        self.render_toasts(ctx);

        let animating = self.slots.iter().any(SlotController::is_uploading)
            || !self.toasts.is_empty();
        if animating {
            ctx.request_repaint_after(Duration::from_millis(PROGRESS_TICK_MS));
        }
    }
}

/// Validates against the on-disk length before reading, so an oversized
/// file is refused without buffering it.
fn load_upload_bytes(path: &Path, file_name: &str) -> Result<Vec<u8>, String> {
    let metadata = std::fs::metadata(path)
        .map_err(|error| format!("Could not read {file_name}: {error}"))?;
    validate_upload(file_name, metadata.len()).map_err(|error| error.to_string())?;
    std::fs::read(path).map_err(|error| format!("Could not read {file_name}: {error}"))
}

fn placeholder_tile(ui: &mut egui::Ui, size: f32) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, 4.0, egui::Color32::from_gray(46));
}

fn ensure_texture(
    textures: &mut HashMap<String, Option<egui::TextureHandle>>,
    ctx: &egui::Context,
    key: String,
    load: impl FnOnce() -> Option<egui::ColorImage>,
) -> Option<egui::TextureHandle> {
    textures
        .entry(key.clone())
        .or_insert_with(|| {
            load().map(|image| ctx.load_texture(key, image, egui::TextureOptions::LINEAR))
        })
        .clone()
}

fn color_image_from_bytes(bytes: &[u8]) -> Option<egui::ColorImage> {
    let decoded = image::load_from_memory(bytes).ok()?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}

#[cfg(test)]
mod tests {
    use love_letter_domain::GallerySpec;

    use super::*;

    #[test]
    fn toast_stack_expires_after_display_plus_grace() {
        let mut stack = ToastStack::new();
        let base = Instant::now();
        stack.push(ToastMessage::info("hello"), base);

        stack.prune(base + TOAST_DISPLAY);
        assert!(!stack.is_empty());

        let during_grace = base + TOAST_DISPLAY + TOAST_EXIT_GRACE / 2;
        stack.prune(during_grace);
        let fading: Vec<bool> = stack.iter(during_grace).map(|(_, fading)| fading).collect();
        assert_eq!(fading, vec![true]);

        stack.prune(base + TOAST_DISPLAY + TOAST_EXIT_GRACE + Duration::from_millis(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn toast_stack_stacks_without_a_cap() {
        let mut stack = ToastStack::new();
        let base = Instant::now();
        for index in 0..20 {
            stack.push(ToastMessage::info(format!("toast {index}")), base);
        }
        assert_eq!(stack.iter(base).count(), 20);
    }

    #[test]
    fn oversized_file_is_refused_by_its_on_disk_length() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("huge.png");
        let file = std::fs::File::create(&path).expect("create file");
        file.set_len(love_letter_domain::MAX_UPLOAD_BYTES + 1)
            .expect("grow file");

        let error = load_upload_bytes(&path, "huge.png").expect_err("oversized must be refused");
        assert!(error.contains("limit"));
    }

    #[test]
    fn small_file_loads_in_full() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("beach.png");
        std::fs::write(&path, [1, 2, 3]).expect("write file");

        let bytes = load_upload_bytes(&path, "beach.png").expect("should load");
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    fn sample_view() -> GalleryView {
        let spec = GallerySpec::new(vec![(
            "Adventures".to_string(),
            vec!["a.jpg".to_string()],
        )]);
        GalleryView::from_spec(&spec, "Adventures", "us")
    }

    #[test]
    fn gallery_viewer_open_then_close_clears_state() {
        let mut viewer = GalleryViewer::new();
        viewer.open(sample_view());
        assert!(viewer.active().is_some());

        viewer.view_full_image("a.jpg".to_string(), "a".to_string());
        assert!(viewer.full_image().is_some());

        viewer.close();
        assert!(viewer.active().is_none());
        assert!(viewer.full_image().is_none());
    }

    #[test]
    fn dismissing_full_image_keeps_gallery_open() {
        let mut viewer = GalleryViewer::new();
        viewer.open(sample_view());
        viewer.view_full_image("a.jpg".to_string(), "a".to_string());

        viewer.dismiss_full_image();
        assert!(viewer.full_image().is_none());
        assert!(viewer.active().is_some());
    }
}
