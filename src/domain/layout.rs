use std::path::PathBuf;

use crate::domain::AppError;

const EXAMPLES_DIR: &str = "examples";
const INVENTORY_DIR: &str = "inventory";
const TEMPLATES_DIR: &str = "templates";
const HOST_VARS_DIR: &str = "host_vars";

const HOSTS_FILE: &str = "hosts";
const CONFIG_FILE: &str = "config.hjson";
const POSTGRESQL_FILE: &str = "customPostgresql.conf";
const PICTRS_FILE: &str = "pictrs.yml";

/// All source and destination paths the setup workflow touches, anchored at
/// the deployment checkout root.
#[derive(Debug, Clone)]
pub struct DeployLayout {
    root: PathBuf,
}

impl DeployLayout {
    /// Create a layout for the given checkout root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a layout for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn examples_dir(&self) -> PathBuf {
        self.root.join(EXAMPLES_DIR)
    }

    pub fn example_hosts(&self) -> PathBuf {
        self.examples_dir().join(HOSTS_FILE)
    }

    pub fn example_config(&self) -> PathBuf {
        self.examples_dir().join(CONFIG_FILE)
    }

    pub fn example_postgresql(&self) -> PathBuf {
        self.examples_dir().join(POSTGRESQL_FILE)
    }

    pub fn example_pictrs(&self) -> PathBuf {
        self.examples_dir().join(PICTRS_FILE)
    }

    pub fn inventory_dir(&self) -> PathBuf {
        self.root.join(INVENTORY_DIR)
    }

    pub fn hosts_file(&self) -> PathBuf {
        self.inventory_dir().join(HOSTS_FILE)
    }

    /// Per-domain host variables directory.
    pub fn host_vars_dir(&self, domain: &str) -> PathBuf {
        self.inventory_dir().join(HOST_VARS_DIR).join(domain)
    }

    pub fn config_file(&self, domain: &str) -> PathBuf {
        self.host_vars_dir(domain).join(CONFIG_FILE)
    }

    pub fn postgresql_file(&self, domain: &str) -> PathBuf {
        self.host_vars_dir(domain).join(POSTGRESQL_FILE)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    pub fn pictrs_template(&self) -> PathBuf {
        self.templates_dir().join(PICTRS_FILE)
    }
}
