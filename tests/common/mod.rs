//! Shared testing utilities for lemmy-setup tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_fs::TempDir;

use lemmy_setup::app::AppContext;
use lemmy_setup::app::commands::setup::{self, SetupOutcome};
use lemmy_setup::domain::{AppError, DeployLayout};
use lemmy_setup::ports::Prompter;

/// The example templates a deployment checkout ships with.
#[allow(dead_code)]
pub const EXAMPLE_HOSTS: &str = "[lemmy]\n# Copy this file to `inventory/hosts` and adjust it to your server\nmyuser@example.com  domain=example.com  letsencrypt_contact_email=your@email.com  lemmy_base_dir=/srv/lemmy\n";

#[allow(dead_code)]
pub const EXAMPLE_CONFIG: &str = "{\n  # Lemmy server settings\n  database: {\n    password: \"{{ postgres_password }}\"\n  }\n  hostname: \"{{ domain }}\"\n}\n";

#[allow(dead_code)]
pub const EXAMPLE_POSTGRESQL: &str =
    "# Tune these settings to your hardware\nshared_buffers = 256MB\nmax_connections = 100\n";

#[allow(dead_code)]
pub const EXAMPLE_PICTRS: &str =
    "# pict-rs container settings\npictrs_safety: false\npictrs_tag: \"0.5\"\n";

/// Testing harness providing an isolated deployment checkout.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an isolated checkout with the example templates seeded.
    pub fn new() -> Self {
        let ctx = Self::bare();
        ctx.write("examples/hosts", EXAMPLE_HOSTS);
        ctx.write("examples/config.hjson", EXAMPLE_CONFIG);
        ctx.write("examples/customPostgresql.conf", EXAMPLE_POSTGRESQL);
        ctx.write("examples/pictrs.yml", EXAMPLE_PICTRS);
        ctx
    }

    /// Create an isolated checkout with no example templates at all.
    pub fn bare() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the checkout root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path for a checkout-relative file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a checkout-relative file, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create test directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    /// Read a checkout-relative file to a string.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read test file")
    }

    /// Build a command for invoking the compiled `lemmy-setup` binary in
    /// this checkout.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("lemmy-setup").expect("Failed to locate binary");
        cmd.current_dir(self.root());
        cmd
    }
}

/// One scripted answer for the prompt sequence.
#[derive(Debug)]
#[allow(dead_code)]
pub enum Reply {
    /// Answer a text prompt with this value.
    Text(&'static str),
    /// Answer a text prompt by accepting its default.
    UseDefault,
    /// Answer a confirmation prompt.
    Confirm(bool),
}

/// Prompter that replays a fixed answer sequence, for workflow tests.
#[allow(dead_code)]
pub struct ScriptedPrompter {
    replies: RefCell<VecDeque<Reply>>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self { replies: RefCell::new(replies.into_iter().collect()) }
    }
}

impl Prompter for ScriptedPrompter {
    fn text(
        &self,
        message: &str,
        default: Option<&str>,
        _help: Option<&str>,
    ) -> Result<String, AppError> {
        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Text(value)) => Ok(value.trim().to_string()),
            Some(Reply::UseDefault) => Ok(default.unwrap_or_default().trim().to_string()),
            other => panic!("Unexpected text prompt '{message}' (scripted reply: {other:?})"),
        }
    }

    fn confirm(&self, message: &str, _help: Option<&str>) -> Result<bool, AppError> {
        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Confirm(value)) => Ok(value),
            other => panic!("Unexpected confirm prompt '{message}' (scripted reply: {other:?})"),
        }
    }
}

/// Run the full setup workflow against the checkout with scripted answers.
#[allow(dead_code)]
pub fn run_setup(ctx: &TestContext, replies: Vec<Reply>) -> Result<SetupOutcome, AppError> {
    let layout = DeployLayout::new(ctx.root().to_path_buf());
    let app = AppContext::new(layout, ScriptedPrompter::new(replies));
    setup::execute(&app)
}
