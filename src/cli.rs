use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "upm-dev")]
#[command(version)]
#[command(about = "Unity package scaffolding CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a new package under the packages root
    New(Box<PackageNewArgs>),
    /// Delete a package and its sidecar meta file
    Delete(PackageDeleteArgs),
    /// List packages under the packages root
    List(PackageListArgs),
    /// Open a package (or the packages root) in the OS file browser
    Open(PackageOpenArgs),
    /// Manage the packages root folder
    #[command(subcommand)]
    Root(RootCommand),
    /// Manage upm-dev configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug, Default)]
pub struct PackageNewArgs {
    /// Package name (spaces become underscores on disk)
    pub name: String,
    /// Manifest description
    #[arg(long = "description", default_value = "")]
    pub description: String,
    /// Package author (default: defaults.package.author from config)
    #[arg(long = "author")]
    pub author: Option<String>,
    /// Package author email (default: defaults.package.email from config)
    #[arg(long = "email")]
    pub email: Option<String>,
    /// Organization for the reverse-domain identifier (default: defaults.package.organization)
    #[arg(long = "org")]
    pub organization: Option<String>,
    /// Skip the empty Tests directory
    #[arg(long = "no-tests")]
    pub no_tests: bool,
    /// Skip the Editor assembly definition
    #[arg(long = "no-editor")]
    pub no_editor: bool,
    /// Write the boilerplate runtime script
    #[arg(long = "default-script")]
    pub default_script: bool,
    /// Skip `git init` and the GitHub Desktop handoff
    #[arg(long = "no-git")]
    pub no_git: bool,
    /// Open the created package in the OS file browser
    #[arg(long = "open")]
    pub open: bool,
    /// Emit JSON output
    #[arg(long = "json")]
    pub json: bool,
    /// Project root containing MyPackages (default: UPM_DEV_ROOT or the current directory)
    #[arg(long = "root")]
    pub root: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct PackageDeleteArgs {
    /// Package name (normalized the same way as on creation)
    pub name: String,
    /// Emit JSON output
    #[arg(long = "json")]
    pub json: bool,
    /// Project root containing MyPackages (default: UPM_DEV_ROOT or the current directory)
    #[arg(long = "root")]
    pub root: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct PackageListArgs {
    /// Emit JSON output
    #[arg(long = "json")]
    pub json: bool,
    /// Project root containing MyPackages (default: UPM_DEV_ROOT or the current directory)
    #[arg(long = "root")]
    pub root: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct PackageOpenArgs {
    /// Package to open; the packages root when omitted
    pub name: Option<String>,
    /// Project root containing MyPackages (default: UPM_DEV_ROOT or the current directory)
    #[arg(long = "root")]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum RootCommand {
    /// Create the packages root folder
    Init(RootArgs),
    /// Open the packages root in the OS file browser
    Open(RootArgs),
    /// Report whether the packages root exists
    Status(RootArgs),
}

#[derive(Args, Debug, Default)]
pub struct RootArgs {
    /// Project root containing MyPackages (default: UPM_DEV_ROOT or the current directory)
    #[arg(long = "root")]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a key in upm-dev config (e.g. defaults.package.organization)
    Set(ConfigSetArgs),
}

#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Config key path (e.g. defaults.package.organization)
    pub key: String,
    /// Value to assign to the key (stored as a string)
    pub value: String,
    /// Override config file path (default: $XDG_CONFIG_HOME/upm-dev/config.toml)
    #[arg(long = "file")]
    pub file: Option<PathBuf>,
}
