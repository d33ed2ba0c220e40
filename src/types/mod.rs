//! Public types for the trivia-query API.

mod options;
mod question;
mod response;
mod state;

pub use options::TriviaOptions;
pub use question::{Difficulty, QuestionDifficulty, TriviaQuestion};
pub use response::TriviaResponse;
pub use state::RequestState;
