//! lemmy-setup: prepare the inventory and templates for a Lemmy Ansible deployment.
//!
//! A one-shot interactive workflow: detect leftovers from a previous run,
//! clean them up on confirmation, ask the operator for the deployment
//! answers, then copy and patch the example templates into place.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::AppContext;
use app::commands::setup;
use domain::DeployLayout;
use services::ConsolePrompter;

pub use app::commands::setup::SetupOutcome;
pub use domain::AppError;

/// Run the setup workflow in the current directory with terminal prompts.
pub fn run() -> Result<SetupOutcome, AppError> {
    let layout = DeployLayout::current()?;
    let prompter = ConsolePrompter::new();
    let ctx = AppContext::new(layout, prompter);

    let outcome = setup::execute(&ctx)?;
    match outcome {
        SetupOutcome::Completed => println!("✅ Done! You can now run the ansible playbook"),
        SetupOutcome::DomainRequired => println!("Domain required"),
    }
    Ok(outcome)
}
