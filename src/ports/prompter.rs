use crate::domain::AppError;

/// Synchronous operator prompt service.
///
/// The workflow only ever needs two shapes of question: free text with an
/// editable default, and a yes/no confirmation that defaults to no. Both
/// block until the operator answers.
pub trait Prompter {
    /// Ask for a line of text. `default` pre-fills the answer; `help` is an
    /// optional explanatory line shown with the prompt. Returns the answer
    /// trimmed, which may be empty if the operator cleared the default.
    fn text(
        &self,
        message: &str,
        default: Option<&str>,
        help: Option<&str>,
    ) -> Result<String, AppError>;

    /// Ask a yes/no question, defaulting to no.
    fn confirm(&self, message: &str, help: Option<&str>) -> Result<bool, AppError>;
}
