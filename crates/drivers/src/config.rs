use love_letter_domain::GallerySpec;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_path: String,
    pub downloads_dir: String,
    pub gallery_dir: String,
    pub slot_ids: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: "memories.sqlite3".to_string(),
            downloads_dir: "downloads".to_string(),
            gallery_dir: "gallery".to_string(),
            slot_ids: (1..=6).map(|index| format!("photo-{index}")).collect(),
        }
    }
}

/// The static gallery table. Image files are external assets resolved
/// against `gallery_dir`; missing ones render as placeholder tiles.
pub fn default_galleries() -> GallerySpec {
    GallerySpec::new(vec![
        (
            "Our Adventures".to_string(),
            vec![
                "adventure-1.jpg".to_string(),
                "adventure-2.jpg".to_string(),
                "adventure-3.jpg".to_string(),
                "adventure-4.jpg".to_string(),
                "adventure-5.jpg".to_string(),
                "adventure-6.jpg".to_string(),
                "adventure-7.jpg".to_string(),
                "adventure-8.jpg".to_string(),
                "adventure-9.jpg".to_string(),
            ],
        ),
        (
            "Little Moments".to_string(),
            vec![
                "moment-1.jpg".to_string(),
                "moment-2.jpg".to_string(),
                "moment-3.jpg".to_string(),
                "moment-4.jpg".to_string(),
                "moment-5.jpg".to_string(),
                "moment-6.jpg".to_string(),
            ],
        ),
        (
            "Holidays".to_string(),
            vec![
                "holiday-1.jpg".to_string(),
                "holiday-2.jpg".to_string(),
                "holiday-3.jpg".to_string(),
                "holiday-4.jpg".to_string(),
            ],
        ),
    ])
}
