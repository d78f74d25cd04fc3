use core::fmt::{self, Write};

/// Position of a set inside the loaded word data.
pub type SetIndex = usize;

/// Position of a word inside a set.
pub type WordIndex = usize;

/// Placeholder shown in place of a hidden letter.
pub const BLANK: char = '_';

/// Blank count of the default mask, the same for every word length.
pub const DEFAULT_MASK_BLANKS: usize = 4;

/// Writes `chars` followed by `blanks` placeholders, every glyph separated by a single space.
pub(crate) fn write_spaced<I>(f: &mut fmt::Formatter<'_>, chars: I, blanks: usize) -> fmt::Result
where
    I: IntoIterator<Item = char>,
{
    let mut first = true;
    let placeholders = core::iter::repeat_n(BLANK, blanks);
    for ch in chars.into_iter().chain(placeholders) {
        if !first {
            f.write_char(' ')?;
        }
        f.write_char(ch)?;
        first = false;
    }
    Ok(())
}

/// Leading character of `word`, words are never empty once loaded.
pub(crate) fn first_letter(word: &str) -> char {
    word.chars().next().unwrap_or(BLANK)
}

/// Length of `word` in characters, which is what hints count in.
pub(crate) fn letter_count(word: &str) -> usize {
    word.chars().count()
}
