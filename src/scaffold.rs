//! Filesystem side of package creation.
//!
//! Every operation is a single linear sequence: each step completes before
//! the next starts, a failing step aborts the remainder, and whatever was
//! already written stays on disk. There is no rollback and no coordination
//! between concurrent invocations.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use tracing::{debug, info};

use crate::manifest::{self, ModuleDefinition, PackageManifest};
use crate::package::PackageConfig;
use crate::util::process::{self, CommandSpec};

/// Fixed folder, directly under the project root, that owns every generated
/// package.
pub const PACKAGES_DIR_NAME: &str = "MyPackages";

const RUNTIME_DIR: &str = "Runtime";
const EDITOR_DIR: &str = "Editor";
const TESTS_DIR: &str = "Tests";
const MANIFEST_FILE: &str = "package.json";

/// Replace spaces so the name works as a folder and assembly name.
pub fn normalize_name(raw: &str) -> String {
    raw.replace(' ', "_")
}

/// Organization segment of the reverse-domain identifier.
pub fn normalize_organization(raw: &str) -> String {
    raw.replace(' ', "_").to_lowercase()
}

/// Handle on the `MyPackages/` folder of one project.
#[derive(Debug, Clone)]
pub struct PackagesRoot {
    base: PathBuf,
}

impl PackagesRoot {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            base: project_root.into().join(PACKAGES_DIR_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.base
    }

    pub fn exists(&self) -> bool {
        self.base.is_dir()
    }

    /// Create the packages root. An attached Unity asset database picks the
    /// folder up on its next rescan.
    pub fn create(&self) -> Result<()> {
        fs::create_dir_all(&self.base)
            .with_context(|| format!("failed to create packages root {}", self.base.display()))?;
        debug!(path = %self.base.display(), "packages root created; asset rescan pending");
        Ok(())
    }

    /// Folder a package of this name lives in (raw or normalized input).
    pub fn package_path(&self, package_name: &str) -> PathBuf {
        self.base.join(normalize_name(package_name))
    }

    pub fn package_exists(&self, package_name: &str) -> bool {
        self.package_path(package_name).is_dir()
    }

    /// Sorted folder names under the packages root.
    pub fn list_packages(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.base)
            .with_context(|| format!("failed to read packages root {}", self.base.display()))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("failed to read entry under {}", self.base.display()))?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Scaffold a package from an already validated config and return its
    /// path. Steps run in a fixed order; duplicate-name protection is the
    /// caller's pre-check, not re-checked here.
    pub fn create_package(&self, config: &PackageConfig) -> Result<PathBuf> {
        let name = normalize_name(&config.package_name);
        let organization = normalize_organization(&config.organization);
        let package_path = self.base.join(&name);

        info!("Creating package {name} at {}", package_path.display());

        let runtime_dir = package_path.join(RUNTIME_DIR);
        fs::create_dir_all(&runtime_dir)
            .with_context(|| format!("failed to create {}", runtime_dir.display()))?;
        write_document(
            &runtime_dir.join(format!("{name}.Runtime.asmdef")),
            &ModuleDefinition::runtime(&name).to_json()?,
        )?;

        if config.create_editor {
            let editor_dir = package_path.join(EDITOR_DIR);
            fs::create_dir_all(&editor_dir)
                .with_context(|| format!("failed to create {}", editor_dir.display()))?;
            write_document(
                &editor_dir.join(format!("{name}.Editor.asmdef")),
                &ModuleDefinition::editor(&name).to_json()?,
            )?;
        }

        if config.create_tests {
            let tests_dir = package_path.join(TESTS_DIR);
            fs::create_dir_all(&tests_dir)
                .with_context(|| format!("failed to create {}", tests_dir.display()))?;
        }

        write_document(
            &package_path.join(MANIFEST_FILE),
            &PackageManifest::new(&name, &config.package_description, &organization).to_json()?,
        )?;

        if config.create_git_repo {
            init_git_repo(&package_path)?;
        }

        if config.create_default_script {
            write_document(
                &runtime_dir.join(format!("{name}_DefaultScript.cs")),
                &manifest::default_script(&name),
            )?;
        }

        info!("Done! Package {name} created at {}", package_path.display());
        Ok(package_path)
    }

    /// Remove a package tree and its sidecar meta file. The path is not
    /// pre-checked: deleting a package that does not exist surfaces the
    /// underlying io error.
    pub fn delete_package(&self, package_name: &str) -> Result<PathBuf> {
        let name = normalize_name(package_name);
        let package_path = self.base.join(&name);
        fs::remove_dir_all(&package_path)
            .with_context(|| format!("failed to delete package {}", package_path.display()))?;

        let sidecar = self.base.join(format!("{name}.meta"));
        if sidecar.exists() {
            fs::remove_file(&sidecar)
                .with_context(|| format!("failed to delete {}", sidecar.display()))?;
        }

        debug!(path = %package_path.display(), "package deleted; asset rescan pending");
        Ok(package_path)
    }
}

/// Show a path in the OS file browser. Windows wants the path quoted so
/// spaces survive the explorer handoff; other platforms take it verbatim.
pub fn open_in_file_browser(path: &Path) -> Result<()> {
    let target = if cfg!(windows) {
        OsString::from(format!("\"{}\"", path.display()))
    } else {
        path.as_os_str().to_os_string()
    };
    let mut spec = CommandSpec::new(opener_program());
    spec.args = vec![target];
    process::launch(spec)
}

/// `git init` in the package directory, then hand the new repository to the
/// GitHub Desktop client. Waits for git so the repository exists before the
/// client opens it; no timeout is applied.
fn init_git_repo(package_path: &Path) -> Result<()> {
    let git = which::which("git").context("failed to find `git` in PATH")?;
    let mut spec = CommandSpec::new(git.into_os_string());
    spec.args = vec![OsString::from("init")];
    spec.current_dir = Some(package_path.to_path_buf());
    let status = process::run(spec)?;
    ensure!(
        status.success(),
        "`git init` failed with exit code {} in {}",
        status.code().unwrap_or_default(),
        package_path.display()
    );
    open_repo_in_github_client(package_path)
}

/// GitHub Desktop listens on the `x-github-client` URI scheme.
fn open_repo_in_github_client(package_path: &Path) -> Result<()> {
    let uri = format!("x-github-client://openRepo/{}", package_path.display());
    let mut spec = CommandSpec::new(opener_program());
    spec.args = vec![OsString::from(uri)];
    process::launch(spec)
}

/// Platform launcher used for both folder and URI handoffs.
fn opener_program() -> &'static str {
    if cfg!(windows) {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

fn write_document(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
