use crate::domain::DeployLayout;
use crate::ports::Prompter;

/// Application context holding dependencies for command execution.
pub struct AppContext<P: Prompter> {
    layout: DeployLayout,
    prompter: P,
}

impl<P: Prompter> AppContext<P> {
    /// Create a new application context.
    pub fn new(layout: DeployLayout, prompter: P) -> Self {
        Self { layout, prompter }
    }

    /// Get a reference to the deployment layout.
    pub fn layout(&self) -> &DeployLayout {
        &self.layout
    }

    /// Get a reference to the prompt service.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }
}
