/// A gallery renders at most this many tiles.
pub const GALLERY_SLOT_COUNT: usize = 9;

/// Static title -> ordered image list table. Built once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySpec {
    galleries: Vec<(String, Vec<String>)>,
}

impl GallerySpec {
    pub fn new(galleries: Vec<(String, Vec<String>)>) -> Self {
        Self { galleries }
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.galleries.iter().map(|(title, _)| title.as_str())
    }

    /// Images for a title in defined order, truncated to the slot count.
    /// An unknown title is an empty list, never an error.
    pub fn images_for(&self, title: &str) -> &[String] {
        self.galleries
            .iter()
            .find(|(name, _)| name == title)
            .map(|(_, images)| {
                let end = images.len().min(GALLERY_SLOT_COUNT);
                &images[..end]
            })
            .unwrap_or(&[])
    }
}

/// What a gallery modal renders: always exactly `GALLERY_SLOT_COUNT`
/// tiles, trailing ones empty placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub title: String,
    pub subtitle: String,
    pub tiles: Vec<Option<String>>,
}

impl GalleryView {
    pub fn from_spec(spec: &GallerySpec, title: &str, subtitle: &str) -> Self {
        let images = spec.images_for(title);
        let mut tiles: Vec<Option<String>> = images.iter().cloned().map(Some).collect();
        tiles.resize(GALLERY_SLOT_COUNT, None);
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            tiles,
        }
    }

    pub fn image_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> GallerySpec {
        GallerySpec::new(vec![
            (
                "Adventures".to_string(),
                vec!["a.jpg".to_string(), "b.jpg".to_string()],
            ),
            (
                "Everything".to_string(),
                (0..12).map(|index| format!("img-{index}.jpg")).collect(),
            ),
        ])
    }

    #[test]
    fn known_title_keeps_defined_order() {
        assert_eq!(spec().images_for("Adventures"), ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn unknown_title_is_empty_not_an_error() {
        assert!(spec().images_for("Missing").is_empty());
    }

    #[test]
    fn long_lists_are_truncated_to_slot_count() {
        assert_eq!(spec().images_for("Everything").len(), GALLERY_SLOT_COUNT);
    }

    #[test]
    fn view_pads_with_placeholders() {
        let view = GalleryView::from_spec(&spec(), "Adventures", "two of us");
        assert_eq!(view.tiles.len(), GALLERY_SLOT_COUNT);
        assert_eq!(view.image_count(), 2);
        assert_eq!(view.tiles[0].as_deref(), Some("a.jpg"));
        assert_eq!(view.tiles[1].as_deref(), Some("b.jpg"));
        assert!(view.tiles[2].is_none());
    }

    #[test]
    fn view_for_unknown_title_is_all_placeholders() {
        let view = GalleryView::from_spec(&spec(), "Missing", "");
        assert_eq!(view.tiles.len(), GALLERY_SLOT_COUNT);
        assert_eq!(view.image_count(), 0);
    }
}
