use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// What a single word slot displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotView {
    /// Word is fully revealed.
    Fixed(String),
    /// First letter followed by the fixed-width blank mask.
    DefaultMask(char),
    /// First letter followed by one blank per remaining letter.
    FullMask { first: char, blanks: usize },
    /// Revealed prefix followed by one blank per letter still hidden.
    LetterProgress { prefix: String, blanks: usize },
}

impl SlotView {
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    pub const fn is_masked(&self) -> bool {
        !self.is_fixed()
    }
}

impl fmt::Display for SlotView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SlotView::*;
        match self {
            Fixed(word) => f.write_str(word),
            DefaultMask(first) => write_spaced(f, [*first], DEFAULT_MASK_BLANKS),
            FullMask { first, blanks } => write_spaced(f, [*first], *blanks),
            LetterProgress { prefix, blanks } => write_spaced(f, prefix.chars(), *blanks),
        }
    }
}

/// Label of the control that triggers [`RevealEngine::advance`](crate::RevealEngine::advance).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvanceLabel {
    Next,
    NextSet,
}

impl AdvanceLabel {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::NextSet => "Next Set",
        }
    }
}

impl fmt::Display for AdvanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn default_mask_always_has_four_blanks() {
        assert_eq!(SlotView::DefaultMask('B').to_string(), "B _ _ _ _");
    }

    #[test]
    fn full_mask_without_blanks_has_no_trailing_space() {
        let view = SlotView::FullMask {
            first: 'A',
            blanks: 0,
        };
        assert_eq!(view.to_string(), "A");
    }

    #[test]
    fn letter_progress_spaces_prefix_and_blanks() {
        let partial = SlotView::LetterProgress {
            prefix: "BAN".into(),
            blanks: 3,
        };
        let complete = SlotView::LetterProgress {
            prefix: "BANANA".into(),
            blanks: 0,
        };

        assert_eq!(partial.to_string(), "B A N _ _ _");
        assert_eq!(complete.to_string(), "B A N A N A");
    }

    #[test]
    fn advance_label_text() {
        assert_eq!(AdvanceLabel::Next.to_string(), "Next");
        assert_eq!(AdvanceLabel::NextSet.to_string(), "Next Set");
    }
}
