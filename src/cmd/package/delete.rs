use std::path::PathBuf;

use anyhow::Result;
use upm_dev::cli::PackageDeleteArgs;
use upm_dev::scaffold;

use crate::cmd::package::{TOOL_NAME, emit_human_hint, emit_json_error};

const ERROR_CODE_DELETE: &str = "E_PACKAGE_DELETE";

pub fn run_delete(args: &PackageDeleteArgs) -> Result<()> {
    if args.json {
        return run_delete_json(args);
    }
    run_delete_human(args)
}

fn run_delete_json(args: &PackageDeleteArgs) -> Result<()> {
    match delete_package(args) {
        Ok(path) => {
            let wrapper = serde_json::json!({
                "tool": TOOL_NAME,
                "command": "delete",
                "ok": true,
                "package": scaffold::normalize_name(&args.name),
                "path": path.display().to_string(),
            });
            println!("{}", serde_json::to_string(&wrapper)?);
            Ok(())
        }
        Err(error) => {
            emit_json_error("delete", ERROR_CODE_DELETE, &error.to_string())?;
            Err(error)
        }
    }
}

fn run_delete_human(args: &PackageDeleteArgs) -> Result<()> {
    match delete_package(args) {
        Ok(path) => {
            println!("Deleted package at {}", path.display());
            Ok(())
        }
        Err(error) => {
            emit_human_hint("Package deletion failed", &error);
            Err(error)
        }
    }
}

fn delete_package(args: &PackageDeleteArgs) -> Result<PathBuf> {
    let root = crate::cmd::packages_root(args.root.as_deref())?;
    root.delete_package(&args.name)
}
