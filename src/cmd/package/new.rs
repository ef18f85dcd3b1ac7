use std::path::PathBuf;

use anyhow::{Result, bail};
use upm_dev::cli::PackageNewArgs;
use upm_dev::config::{self, PackageDefaults};
use upm_dev::package::PackageConfig;
use upm_dev::scaffold;
use upm_dev::validate;

use crate::cmd::package::{TOOL_NAME, emit_human_hint, emit_json_error};

const ERROR_CODE_NEW: &str = "E_PACKAGE_SCAFFOLD";

pub fn run_new(args: &PackageNewArgs) -> Result<()> {
    if args.json {
        return run_new_json(args);
    }
    run_new_human(args)
}

fn run_new_json(args: &PackageNewArgs) -> Result<()> {
    match create_package(args) {
        Ok(path) => {
            let wrapper = serde_json::json!({
                "tool": TOOL_NAME,
                "command": "new",
                "ok": true,
                "package": scaffold::normalize_name(&args.name),
                "path": path.display().to_string(),
            });
            println!("{}", serde_json::to_string(&wrapper)?);
            Ok(())
        }
        Err(error) => {
            emit_json_error("new", ERROR_CODE_NEW, &error.to_string())?;
            Err(error)
        }
    }
}

fn run_new_human(args: &PackageNewArgs) -> Result<()> {
    match create_package(args) {
        Ok(path) => {
            println!("Created package at {}", path.display());
            Ok(())
        }
        Err(error) => {
            emit_human_hint("Package scaffolding failed", &error);
            Err(error)
        }
    }
}

fn create_package(args: &PackageNewArgs) -> Result<PathBuf> {
    let file_config = config::load()?;
    let config = build_package_config(args, &file_config.defaults.package);

    let errors = validate::field_errors(&config);
    if !errors.is_empty() {
        for (field, message) in &errors {
            eprintln!("{field}: {message}");
        }
        bail!("please correct all the errors on the fields");
    }

    let root = crate::cmd::packages_root(args.root.as_deref())?;
    if !root.exists() {
        bail!(
            "packages root {} does not exist; run `upm-dev root init` first",
            root.path().display()
        );
    }
    if root.package_exists(&config.package_name) {
        bail!(
            "a package with the name {} already exists; choose a different name",
            config.package_name
        );
    }

    let path = root.create_package(&config)?;
    if args.open {
        scaffold::open_in_file_browser(&path)?;
    }
    Ok(path)
}

fn build_package_config(args: &PackageNewArgs, defaults: &PackageDefaults) -> PackageConfig {
    let author = args.author.as_deref().or(defaults.author.as_deref());
    let email = args.email.as_deref().or(defaults.email.as_deref());
    let organization = args
        .organization
        .as_deref()
        .or(defaults.organization.as_deref());
    PackageConfig {
        package_name: args.name.clone(),
        package_description: args.description.clone(),
        package_author: author.unwrap_or_default().to_string(),
        package_author_email: email.unwrap_or_default().to_string(),
        organization: organization.unwrap_or_default().to_string(),
        create_tests: !args.no_tests,
        create_editor: !args.no_editor,
        create_default_script: args.default_script,
        create_git_repo: !args.no_git,
    }
}
