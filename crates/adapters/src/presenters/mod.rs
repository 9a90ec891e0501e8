use love_letter_application::UploadReceipt;
use love_letter_domain::{GalleryView, PhotoRecord, SlotId};

pub fn present_record(slot_id: &SlotId, record: &PhotoRecord) -> String {
    format!(
        "{}\t{}\t{}\t{} bytes encoded",
        slot_id,
        record.original_name,
        record.uploaded_at,
        record.image_data.len()
    )
}

pub fn present_receipt(slot_id: &SlotId, receipt: &UploadReceipt) -> String {
    format!(
        "saved {} into slot {} at {}, download at {}",
        receipt.record.original_name,
        slot_id,
        receipt.record.uploaded_at,
        receipt.download_path.display()
    )
}

pub fn present_gallery(view: &GalleryView) -> String {
    let mut lines = vec![format!(
        "{} | {} ({} images)",
        view.title,
        view.subtitle,
        view.image_count()
    )];
    for (index, tile) in view.tiles.iter().enumerate() {
        match tile {
            Some(image) => lines.push(format!("  {}: {}", index + 1, image)),
            None => lines.push(format!("  {}: (empty)", index + 1)),
        }
    }
    lines.join("\n")
}
