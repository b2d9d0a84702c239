/// Screen the runner is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    LanguageSelect,
    TopicSelect,
    Quiz,
    /// Verdict for the answer just submitted.
    Feedback,
    Result,
}
