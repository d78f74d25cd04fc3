#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use slot::*;
pub use timer::*;
pub use types::*;

mod engine;
mod error;
mod slot;
mod timer;
mod types;

/// One round of the game: an ordered, non-empty list of non-empty words.
///
/// Only built through [`GameData`], so validation errors name the set they came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<String>")]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    fn validated(set: SetIndex, words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(GameError::EmptySet(set));
        }
        if let Some(word) = words.iter().position(|w| w.is_empty()) {
            return Err(GameError::EmptyWord { set, word });
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a loaded set.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word(&self, index: WordIndex) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }
}

impl From<WordSet> for Vec<String> {
    fn from(set: WordSet) -> Self {
        set.words
    }
}

impl Index<WordIndex> for WordSet {
    type Output = str;

    fn index(&self, index: WordIndex) -> &Self::Output {
        &self.words[index]
    }
}

#[derive(Deserialize)]
struct RawGameData {
    sets: Vec<Vec<String>>,
}

/// All word sets of a game, loaded once and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameData {
    sets: Vec<WordSet>,
}

impl GameData {
    pub fn new(sets: Vec<Vec<String>>) -> Result<Self> {
        if sets.is_empty() {
            return Err(GameError::EmptyData);
        }

        let sets = sets
            .into_iter()
            .enumerate()
            .map(|(index, words)| WordSet::validated(index, words))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("loaded {} word sets", sets.len());
        Ok(Self { sets })
    }

    /// Parses a `{"sets": [["WORD", ...], ...]}` document.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawGameData = serde_json::from_str(json).map_err(|err| {
            log::warn!("rejected word data: {}", err);
            GameError::InvalidData
        })?;
        Self::new(raw.sets)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Always `false`, empty data is rejected on construction.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn sets(&self) -> &[WordSet] {
        &self.sets
    }

    pub fn validate_index(&self, index: SetIndex) -> Result<SetIndex> {
        if index < self.sets.len() {
            Ok(index)
        } else {
            Err(GameError::IndexOutOfRange {
                index,
                len: self.sets.len(),
            })
        }
    }
}

impl<'de> Deserialize<'de> for GameData {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawGameData::deserialize(deserializer)?;
        Self::new(raw.sets).map_err(serde::de::Error::custom)
    }
}

impl Index<SetIndex> for GameData {
    type Output = WordSet;

    fn index(&self, index: SetIndex) -> &Self::Output {
        &self.sets[index]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    NoChange,
    Changed,
}

impl StepOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// A word was revealed and more remain in the set.
    Revealed,
    /// The last word of the set was revealed.
    SetComplete,
    /// The exhausted set was replaced by the given one.
    NextSet(SetIndex),
}

impl AdvanceOutcome {
    pub const fn has_update(self) -> bool {
        true
    }

    pub const fn completed_set(self) -> bool {
        matches!(self, Self::SetComplete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn from_json_reads_sets_in_order() {
        let data = GameData::from_json(r#"{"sets": [["APPLE", "BANANA"], ["CHERRY"]]}"#).unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data[0].words(), ["APPLE", "BANANA"]);
        assert_eq!(&data[1][0], "CHERRY");
    }

    #[test]
    fn rejects_empty_data() {
        assert_eq!(
            GameData::from_json(r#"{"sets": []}"#),
            Err(GameError::EmptyData)
        );
    }

    #[test]
    fn rejects_empty_set_and_empty_word() {
        let empty_set = GameData::new(vec![vec!["A".into()], vec![]]);
        let empty_word = GameData::new(vec![vec!["A".into(), "".into()]]);

        assert_eq!(empty_set, Err(GameError::EmptySet(1)));
        assert_eq!(empty_word, Err(GameError::EmptyWord { set: 0, word: 1 }));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert_eq!(GameData::from_json("[]"), Err(GameError::InvalidData));
        assert_eq!(
            GameData::from_json(r#"{"sets": [[1, 2]]}"#),
            Err(GameError::InvalidData)
        );
    }

    #[test]
    fn validation_errors_name_the_offending_set() {
        let data = GameData::new(vec![
            vec!["A".into(), "B".into()],
            vec!["C".into()],
            vec!["".into(), "D".into()],
        ]);

        assert_eq!(data, Err(GameError::EmptyWord { set: 2, word: 0 }));
    }

    #[test]
    fn deserialize_applies_validation() {
        let data: GameData = serde_json::from_str(r#"{"sets": [["SUN", "FLOWER"]]}"#).unwrap();
        assert_eq!(data[0].words(), ["SUN", "FLOWER"]);

        let err = serde_json::from_str::<GameData>(r#"{"sets": [["SUN"], []]}"#).unwrap_err();
        assert!(err.to_string().contains("Set 1 contains no words"));
    }

    #[test]
    fn validate_index_reports_range() {
        let data = GameData::new(vec![vec!["A".into()]]).unwrap();

        assert_eq!(data.validate_index(0), Ok(0));
        assert_eq!(
            data.validate_index(3),
            Err(GameError::IndexOutOfRange { index: 3, len: 1 })
        );
    }
}
