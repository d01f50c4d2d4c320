//! The whole setup workflow: detect prior state, clean up on consent,
//! collect answers, materialize the inventory, and patch the artifacts.

use std::fs;

use crate::app::AppContext;
use crate::domain::{
    AppError, DeployLayout, HOSTS_PLACEHOLDER, HostAnswers, ObjectStoreAnswers, SetupAnswers,
};
use crate::ports::Prompter;
use crate::services::{Substitutions, artifacts, pictrs, text_patch};

/// How a setup run ended. Both variants are normal terminations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// All artifacts were written.
    Completed,
    /// The operator cleared the domain answer; nothing past cleanup ran.
    DomainRequired,
}

/// Execute the setup command.
pub fn execute<P: Prompter>(ctx: &AppContext<P>) -> Result<SetupOutcome, AppError> {
    prepare_templates(ctx)?;

    let Some(answers) = collect_answers(ctx)? else {
        return Ok(SetupOutcome::DomainRequired);
    };

    materialize_inventory(ctx.layout(), &answers)?;
    patch_hosts(ctx.layout(), &answers)?;

    if let Some(store) = &answers.object_store {
        pictrs::write_env_vars(&ctx.layout().pictrs_template(), &store.env_lines())?;
    }

    Ok(SetupOutcome::Completed)
}

/// Detect artifacts from a previous run and offer to discard them. With no
/// prior state the pictrs template is seeded once; with consent it is
/// deleted together with the inventory and reseeded; on refusal everything
/// is left as found.
fn prepare_templates<P: Prompter>(ctx: &AppContext<P>) -> Result<(), AppError> {
    let layout = ctx.layout();
    let prior_state = layout.inventory_dir().exists() || layout.pictrs_template().exists();

    if !prior_state {
        return seed_pictrs_template(layout);
    }

    if ctx.prompter().confirm("Clean up previous run", None)? {
        if layout.inventory_dir().exists() {
            fs::remove_dir_all(layout.inventory_dir())?;
        }
        if layout.pictrs_template().exists() {
            fs::remove_file(layout.pictrs_template())?;
        }
        seed_pictrs_template(layout)?;
    } else {
        println!(
            "A clean run is recommended! Be sure to inspect the output files if you choose not to perform a clean run"
        );
    }

    Ok(())
}

fn seed_pictrs_template(layout: &DeployLayout) -> Result<(), AppError> {
    artifacts::ensure_dir(&layout.templates_dir())?;
    artifacts::copy_replace(&layout.example_pictrs(), &layout.pictrs_template())
}

/// Prompt for all answers in fixed order. Returns `None` when the operator
/// clears the required domain.
fn collect_answers<P: Prompter>(ctx: &AppContext<P>) -> Result<Option<SetupAnswers>, AppError> {
    let prompter = ctx.prompter();

    let domain = prompter.text("Domain to deploy", Some("example.com"), None)?;
    if domain.is_empty() {
        return Ok(None);
    }

    let user = prompter.text(
        "User on your domain",
        Some("root"),
        Some("User you use to connect to your server via ssh"),
    )?;
    let letsencrypt_contact_email = prompter.text(
        "Let's Encrypt contact email",
        Some(&format!("admin@{domain}")),
        Some("Your email address to get notifications if your ssl cert expires"),
    )?;
    let lemmy_base_dir = prompter.text(
        "Lemmy base directory",
        Some("/srv/lemmy"),
        Some(
            "The location on the server where lemmy can be installed, can be any folder. If you are upgrading from a previous version, set this to `/lemmy`",
        ),
    )?;

    let object_store = if prompter.confirm(
        "Use object storage",
        Some("Object storage (e.g. AWS S3) may reduce operating costs (y/N)"),
    )? {
        Some(collect_object_store(prompter)?)
    } else {
        None
    };

    Ok(Some(SetupAnswers {
        domain,
        host: HostAnswers { user, letsencrypt_contact_email, lemmy_base_dir },
        object_store,
    }))
}

fn collect_object_store<P: Prompter>(prompter: &P) -> Result<ObjectStoreAnswers, AppError> {
    Ok(ObjectStoreAnswers {
        endpoint: prompter.text("Object store endpoint", None, None)?,
        bucket_name: prompter.text("Object store bucket name", None, None)?,
        region: prompter.text("Object store region", None, None)?,
        use_path_style: prompter.confirm("Object store use path style", None)?,
        access_key: prompter.text("Object store access key", None, None)?,
        secret_key: prompter.text("Object store secret key", None, None)?,
    })
}

/// Copy the example artifacts into the inventory. Config artifacts are
/// existence-gated so operator edits survive; the hosts file is regenerated
/// every run and patched afterwards.
fn materialize_inventory(layout: &DeployLayout, answers: &SetupAnswers) -> Result<(), AppError> {
    artifacts::ensure_dir(&layout.host_vars_dir(&answers.domain))?;

    artifacts::copy_if_absent(&layout.example_config(), &layout.config_file(&answers.domain))?;
    artifacts::copy_if_absent(
        &layout.example_postgresql(),
        &layout.postgresql_file(&answers.domain),
    )?;
    artifacts::copy_replace(&layout.example_hosts(), &layout.hosts_file())?;

    Ok(())
}

fn patch_hosts(layout: &DeployLayout, answers: &SetupAnswers) -> Result<(), AppError> {
    let mut substitutions = Substitutions::new();
    substitutions.insert(HOSTS_PLACEHOLDER, answers.host.hosts_line(&answers.domain));
    text_patch::replace_in_file(&layout.hosts_file(), &substitutions)
}
