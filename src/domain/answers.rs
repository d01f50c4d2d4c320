//! Operator answers collected during the setup dialogue.

/// The literal line in `examples/hosts` that gets replaced with real values.
pub const HOSTS_PLACEHOLDER: &str = "myuser@example.com  domain=example.com  letsencrypt_contact_email=your@email.com  lemmy_base_dir=/srv/lemmy";

const PICTRS_ENV_PREFIX: &str = "PICTRS__STORE__";

/// Per-host answers substituted into the inventory hosts file.
#[derive(Debug, Clone)]
pub struct HostAnswers {
    pub user: String,
    pub letsencrypt_contact_email: String,
    pub lemmy_base_dir: String,
}

impl HostAnswers {
    /// Render the hosts-file line for this host, fields separated by two spaces.
    pub fn hosts_line(&self, domain: &str) -> String {
        format!(
            "{}@{}  domain={}  letsencrypt_contact_email={}  lemmy_base_dir={}",
            self.user, domain, domain, self.letsencrypt_contact_email, self.lemmy_base_dir
        )
    }
}

/// S3-compatible object storage answers, collected only on opt-in.
#[derive(Debug, Clone)]
pub struct ObjectStoreAnswers {
    pub endpoint: String,
    pub bucket_name: String,
    pub region: String,
    pub use_path_style: bool,
    pub access_key: String,
    pub secret_key: String,
}

impl ObjectStoreAnswers {
    /// Project the answers into the pict-rs container environment, in the
    /// order the playbook expects. `TYPE` is always `object_storage` and the
    /// path-style flag renders as lowercase `true`/`false`.
    pub fn env_lines(&self) -> Vec<String> {
        vec![
            format!("{PICTRS_ENV_PREFIX}TYPE=object_storage"),
            format!("{PICTRS_ENV_PREFIX}ENDPOINT={}", self.endpoint),
            format!("{PICTRS_ENV_PREFIX}BUCKET_NAME={}", self.bucket_name),
            format!("{PICTRS_ENV_PREFIX}REGION={}", self.region),
            format!("{PICTRS_ENV_PREFIX}USE_PATH_STYLE={}", self.use_path_style),
            format!("{PICTRS_ENV_PREFIX}ACCESS_KEY={}", self.access_key),
            format!("{PICTRS_ENV_PREFIX}SECRET_KEY={}", self.secret_key),
        ]
    }
}

/// Everything the answer collector produces for one run.
#[derive(Debug, Clone)]
pub struct SetupAnswers {
    pub domain: String,
    pub host: HostAnswers,
    pub object_store: Option<ObjectStoreAnswers>,
}
