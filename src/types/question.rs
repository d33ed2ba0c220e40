//! Trivia question and difficulty types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TriviaError;

/// Difficulty filter for a trivia query.
///
/// `All` is only meaningful as a filter; individual questions carry a
/// [`QuestionDifficulty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    All,
}

impl Difficulty {
    /// Wire representation, as used in query strings and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::All => "all",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = TriviaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "all" => Ok(Difficulty::All),
            other => Err(TriviaError::Configuration(format!(
                "unknown difficulty '{other}' (expected easy, medium, hard or all)"
            ))),
        }
    }
}

/// Difficulty of a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionDifficulty {
    Easy,
    Medium,
    Hard,
}

impl From<QuestionDifficulty> for Difficulty {
    fn from(d: QuestionDifficulty) -> Self {
        match d {
            QuestionDifficulty::Easy => Difficulty::Easy,
            QuestionDifficulty::Medium => Difficulty::Medium,
            QuestionDifficulty::Hard => Difficulty::Hard,
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriviaQuestion {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<QuestionDifficulty>,
    /// Answer choices; position is significant.
    pub answers: Vec<String>,
    /// Index into `answers` of the correct choice.
    pub correct_index: usize,
}

impl TriviaQuestion {
    /// Whether `correct_index` points inside `answers`.
    ///
    /// Responses are only parsed structurally, so a question from the
    /// endpoint may violate this.
    pub fn is_well_formed(&self) -> bool {
        self.correct_index < self.answers.len()
    }

    /// The correct answer text, or `None` if the index is out of range.
    pub fn correct_answer(&self) -> Option<&str> {
        self.answers.get(self.correct_index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("ALL".parse::<Difficulty>().unwrap(), Difficulty::All);
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_defaults_to_all() {
        assert_eq!(Difficulty::default(), Difficulty::All);
    }

    #[test]
    fn question_uses_camel_case_index() {
        let json = r#"{"question":"2+2?","answers":["3","4"],"correctIndex":1}"#;
        let q: TriviaQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.correct_index, 1);
        assert_eq!(q.difficulty, None);
        assert_eq!(q.correct_answer(), Some("4"));
        assert!(q.is_well_formed());
    }

    #[test]
    fn out_of_range_index_is_not_well_formed() {
        let q = TriviaQuestion {
            question: "?".into(),
            difficulty: Some(QuestionDifficulty::Hard),
            answers: vec!["only".into()],
            correct_index: 3,
        };
        assert!(!q.is_well_formed());
        assert_eq!(q.correct_answer(), None);
    }
}
