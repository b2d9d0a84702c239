mod language;
mod question;
mod state;
mod topic;

pub use language::Language;
pub use question::{Question, NUM_OPTIONS};
pub use state::AppState;
pub use topic::Topic;
