use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Which hint rendering was applied last to the word under the reveal pointer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum HintView {
    #[default]
    None,
    FullMask,
    Letters,
}

/// Hint progress of the word under the reveal pointer.
///
/// The letter counter and the full-mask flag are independent: toggling the full mask off
/// only hides the letters, the counter keeps its value until the pointer moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HintState {
    letters: usize,
    full_mask: bool,
    view: HintView,
}

impl HintState {
    pub const fn letters(&self) -> usize {
        self.letters
    }

    pub const fn full_mask(&self) -> bool {
        self.full_mask
    }

    pub const fn view(&self) -> HintView {
        self.view
    }
}

impl Default for HintState {
    fn default() -> Self {
        Self {
            letters: 1,
            full_mask: false,
            view: HintView::default(),
        }
    }
}

/// Everything the presentation layer needs to draw the current set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderModel {
    pub set_index: SetIndex,
    pub set_count: usize,
    pub slots: Vec<SlotView>,
    pub advance_label: AdvanceLabel,
}

impl RenderModel {
    /// Heading naming how many words are linked in the current set.
    pub fn title(&self) -> String {
        alloc::format!("Connect {}", self.slots.len())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RevealEngine {
    data: GameData,
    set_index: SetIndex,
    reveal_index: WordIndex,
    hint: HintState,
}

impl RevealEngine {
    /// Creates an engine with the first set loaded.
    pub fn new(data: GameData) -> Self {
        let mut engine = Self {
            data,
            set_index: 0,
            reveal_index: 1,
            hint: HintState::default(),
        };
        engine.reset_set();
        engine
    }

    /// Creates an engine starting at `set_index`.
    pub fn with_start(data: GameData, set_index: SetIndex) -> Result<Self> {
        let mut engine = Self::new(data);
        engine.load_set(set_index)?;
        Ok(engine)
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn set_index(&self) -> SetIndex {
        self.set_index
    }

    pub fn reveal_index(&self) -> WordIndex {
        self.reveal_index
    }

    pub fn hint(&self) -> HintState {
        self.hint
    }

    pub fn current_set(&self) -> &WordSet {
        &self.data[self.set_index]
    }

    /// Whether every word of the current set is revealed.
    pub fn is_set_complete(&self) -> bool {
        self.reveal_index >= self.current_set().len()
    }

    pub fn advance_label(&self) -> AdvanceLabel {
        if self.is_set_complete() {
            AdvanceLabel::NextSet
        } else {
            AdvanceLabel::Next
        }
    }

    pub fn load_set(&mut self, index: SetIndex) -> Result<()> {
        self.set_index = self.data.validate_index(index)?;
        self.reset_set();
        log::debug!("loaded set {}/{}", self.set_index + 1, self.data.len());
        Ok(())
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.is_set_complete() {
            let next = (self.set_index + 1) % self.data.len();
            if next == 0 {
                log::debug!("last set finished, wrapping around");
            }
            self.set_index = next;
            self.reset_set();
            return AdvanceOutcome::NextSet(next);
        }

        log::trace!("revealed word {}", self.reveal_index);
        self.move_pointer(self.reveal_index + 1);

        if self.is_set_complete() {
            AdvanceOutcome::SetComplete
        } else {
            AdvanceOutcome::Revealed
        }
    }

    pub fn back(&mut self) -> StepOutcome {
        if self.reveal_index <= 1 {
            return StepOutcome::NoChange;
        }

        self.move_pointer(self.reveal_index - 1);
        log::trace!("hid word {}", self.reveal_index);
        StepOutcome::Changed
    }

    pub fn toggle_full_hint(&mut self) -> StepOutcome {
        if self.is_set_complete() {
            return StepOutcome::NoChange;
        }

        let hint = &mut self.hint;
        hint.full_mask = !hint.full_mask;
        hint.view = if hint.full_mask {
            HintView::FullMask
        } else {
            HintView::None
        };
        StepOutcome::Changed
    }

    pub fn reveal_next_letter(&mut self) -> StepOutcome {
        let Some(word) = self.pending_word() else {
            return StepOutcome::NoChange;
        };

        if self.hint.letters >= letter_count(word) {
            return StepOutcome::NoChange;
        }

        self.hint.letters += 1;
        self.hint.view = HintView::Letters;
        StepOutcome::Changed
    }

    pub fn slot_at(&self, index: WordIndex) -> Option<SlotView> {
        let word = self.current_set().word(index)?;

        if index == 0 || index < self.reveal_index {
            return Some(SlotView::Fixed(word.into()));
        }

        let first = first_letter(word);
        let view = if index == self.reveal_index {
            self.hint.view
        } else {
            HintView::None
        };

        Some(match view {
            HintView::None => SlotView::DefaultMask(first),
            HintView::FullMask => SlotView::FullMask {
                first,
                blanks: letter_count(word) - 1,
            },
            HintView::Letters => {
                let prefix: String = word.chars().take(self.hint.letters).collect();
                SlotView::LetterProgress {
                    prefix,
                    blanks: letter_count(word) - self.hint.letters,
                }
            }
        })
    }

    pub fn slots(&self) -> impl Iterator<Item = SlotView> + '_ {
        (0..self.current_set().len()).filter_map(move |index| self.slot_at(index))
    }

    pub fn render(&self) -> RenderModel {
        RenderModel {
            set_index: self.set_index,
            set_count: self.data.len(),
            slots: self.slots().collect(),
            advance_label: self.advance_label(),
        }
    }

    fn pending_word(&self) -> Option<&str> {
        self.current_set().word(self.reveal_index)
    }

    fn move_pointer(&mut self, reveal_index: WordIndex) {
        self.reveal_index = reveal_index;
        self.hint = HintState::default();
    }

    fn reset_set(&mut self) {
        let len = self.current_set().len();
        self.move_pointer(len.min(1));
    }
}
