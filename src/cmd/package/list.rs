use std::fs;

use anyhow::Result;
use upm_dev::cli::PackageListArgs;
use upm_dev::manifest::PackageManifest;
use upm_dev::scaffold::PackagesRoot;

use crate::cmd::package::{TOOL_NAME, emit_human_hint, emit_json_error};

const ERROR_CODE_LIST: &str = "E_PACKAGE_LIST";

struct ListedPackage {
    name: String,
    /// Reverse-domain identifier and version when `package.json` parses.
    manifest: Option<(String, String)>,
}

pub fn run_list(args: &PackageListArgs) -> Result<()> {
    if args.json {
        return run_list_json(args);
    }
    run_list_human(args)
}

fn run_list_json(args: &PackageListArgs) -> Result<()> {
    match collect_packages(args) {
        Ok((root, packages)) => {
            let entries = packages
                .iter()
                .map(|package| {
                    serde_json::json!({
                        "name": package.name,
                        "manifest": package.manifest.as_ref().map(|(id, _)| id.clone()),
                        "version": package.manifest.as_ref().map(|(_, version)| version.clone()),
                    })
                })
                .collect::<Vec<_>>();
            let wrapper = serde_json::json!({
                "tool": TOOL_NAME,
                "command": "list",
                "ok": true,
                "root": root.path().display().to_string(),
                "packages": entries,
            });
            println!("{}", serde_json::to_string(&wrapper)?);
            Ok(())
        }
        Err(error) => {
            emit_json_error("list", ERROR_CODE_LIST, &error.to_string())?;
            Err(error)
        }
    }
}

fn run_list_human(args: &PackageListArgs) -> Result<()> {
    match collect_packages(args) {
        Ok((root, packages)) => {
            if packages.is_empty() {
                println!("No packages under {}", root.path().display());
                return Ok(());
            }
            for package in &packages {
                match &package.manifest {
                    Some((id, version)) => println!("{}  ({id}@{version})", package.name),
                    None => println!("{}", package.name),
                }
            }
            Ok(())
        }
        Err(error) => {
            emit_human_hint("Package listing failed", &error);
            Err(error)
        }
    }
}

fn collect_packages(args: &PackageListArgs) -> Result<(PackagesRoot, Vec<ListedPackage>)> {
    let root = crate::cmd::packages_root(args.root.as_deref())?;
    let packages = root
        .list_packages()?
        .into_iter()
        .map(|name| {
            let manifest = read_manifest(&root, &name);
            ListedPackage { name, manifest }
        })
        .collect();
    Ok((root, packages))
}

fn read_manifest(root: &PackagesRoot, name: &str) -> Option<(String, String)> {
    let raw = fs::read_to_string(root.path().join(name).join("package.json")).ok()?;
    let manifest: PackageManifest = serde_json::from_str(&raw).ok()?;
    Some((manifest.name, manifest.version))
}
