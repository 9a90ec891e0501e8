use love_letter_domain::{PhotoRecord, SlotId};

/// Interval of the cosmetic progress animation.
pub const PROGRESS_TICK_MS: u64 = 120;

/// An upload whose outcome never arrives is abandoned after this long so
/// the progress indicator cannot stay up forever.
pub const UPLOAD_DEADLINE_MS: u64 = 15_000;

const PROGRESS_CAP: u8 = 95;
const PROGRESS_STEPS: [u8; 5] = [9, 5, 11, 3, 7];

/// UI state of one slot. `Uploading` carries the prior record so a
/// failed replace restores the previous photo instead of clearing the
/// slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotPhase {
    Empty,
    Uploading {
        file_name: String,
        progress: u8,
        started_at_ms: u64,
        prior: Option<PhotoRecord>,
    },
    Displaying {
        record: PhotoRecord,
    },
}

/// Per-slot state machine: Empty -> Uploading -> Displaying, plus
/// replace and delete. Pure state; ports drive it from outside.
///
/// The generation counter implements cancellation: every upload bumps
/// it, and an outcome is only accepted while its generation is current.
/// A torn-down or replaced upload therefore completes harmlessly.
#[derive(Debug)]
pub struct SlotController {
    slot_id: SlotId,
    generation: u64,
    phase: SlotPhase,
    last_tick_ms: u64,
}

impl SlotController {
    pub fn new(slot_id: SlotId) -> Self {
        Self {
            slot_id,
            generation: 0,
            phase: SlotPhase::Empty,
            last_tick_ms: 0,
        }
    }

    pub fn slot_id(&self) -> &SlotId {
        &self.slot_id
    }

    pub fn phase(&self) -> &SlotPhase {
        &self.phase
    }

    pub fn record(&self) -> Option<&PhotoRecord> {
        match &self.phase {
            SlotPhase::Displaying { record } => Some(record),
            _ => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.phase, SlotPhase::Uploading { .. })
    }

    /// Startup: render Displaying right away when the store has a
    /// record, Empty otherwise.
    pub fn restore(&mut self, record: Option<PhotoRecord>) {
        self.phase = match record {
            Some(record) => SlotPhase::Displaying { record },
            None => SlotPhase::Empty,
        };
    }

    /// Enters Uploading and returns the generation the pipeline job must
    /// carry. A record on display is kept aside, not cleared.
    pub fn begin_upload(&mut self, file_name: &str, now_ms: u64) -> u64 {
        self.generation += 1;
        let prior = match std::mem::replace(&mut self.phase, SlotPhase::Empty) {
            SlotPhase::Displaying { record } => Some(record),
            SlotPhase::Uploading { prior, .. } => prior,
            SlotPhase::Empty => None,
        };
        self.phase = SlotPhase::Uploading {
            file_name: file_name.to_string(),
            progress: 0,
            started_at_ms: now_ms,
            prior,
        };
        self.last_tick_ms = now_ms;
        self.generation
    }

    /// Whether an outcome with this generation still belongs to the slot.
    pub fn accepts(&self, generation: u64) -> bool {
        self.is_uploading() && generation == self.generation
    }

    /// Advances the cosmetic progress percentage. The value is a UI
    /// affordance only and never reaches 100 on its own. Returns true
    /// once the upload deadline has passed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let SlotPhase::Uploading {
            progress,
            started_at_ms,
            ..
        } = &mut self.phase
        else {
            return false;
        };

        if now_ms.saturating_sub(self.last_tick_ms) >= PROGRESS_TICK_MS {
            self.last_tick_ms = now_ms;
            let step = PROGRESS_STEPS[(*progress as usize + self.generation as usize)
                % PROGRESS_STEPS.len()];
            *progress = (*progress + step).min(PROGRESS_CAP);
        }

        now_ms.saturating_sub(*started_at_ms) >= UPLOAD_DEADLINE_MS
    }

    pub fn progress(&self) -> Option<u8> {
        match &self.phase {
            SlotPhase::Uploading { progress, .. } => Some(*progress),
            _ => None,
        }
    }

    pub fn complete(&mut self, record: PhotoRecord) {
        self.phase = SlotPhase::Displaying { record };
    }

    /// Transform or store failure: back to the prior record when this
    /// was a replace, otherwise back to Empty.
    pub fn fail(&mut self) {
        self.phase = match std::mem::replace(&mut self.phase, SlotPhase::Empty) {
            SlotPhase::Uploading {
                prior: Some(record),
                ..
            } => SlotPhase::Displaying { record },
            _ => SlotPhase::Empty,
        };
    }

    /// Abandons a pending upload (teardown, replace-before-finish). The
    /// generation bump makes any in-flight outcome stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.fail();
    }

    /// Delete after user confirmation.
    pub fn delete(&mut self) {
        self.phase = SlotPhase::Empty;
    }
}
