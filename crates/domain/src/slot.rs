use crate::DomainError;

/// Namespace prefix for persisted slot keys.
pub const SLOT_KEY_PREFIX: &str = "love-letter-photo-";

/// Prefix for the derived download file name.
pub const DOWNLOAD_PREFIX: &str = "love-letter-";

/// Stable identifier of one memory slot. At most one photo record exists
/// per slot at any time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotId(String);

impl SlotId {
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidSlotId(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespaced key the slot's record is persisted under.
    pub fn storage_key(&self) -> String {
        format!("{SLOT_KEY_PREFIX}{}", self.0)
    }

    /// File name for the auto-downloaded copy of an upload.
    pub fn download_file_name(&self, original_name: &str) -> String {
        format!("{DOWNLOAD_PREFIX}{}-{original_name}", self.0)
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_id_must_not_be_empty() {
        assert!(SlotId::new("photo-1").is_ok());
        assert!(matches!(
            SlotId::new("   "),
            Err(DomainError::InvalidSlotId(_))
        ));
    }

    #[test]
    fn storage_key_is_namespaced() {
        let slot = SlotId::new("photo-1").expect("slot id");
        assert_eq!(slot.storage_key(), "love-letter-photo-photo-1");
    }

    #[test]
    fn download_name_carries_slot_and_original() {
        let slot = SlotId::new("photo-1").expect("slot id");
        assert_eq!(
            slot.download_file_name("beach.png"),
            "love-letter-photo-1-beach.png"
        );
    }
}
