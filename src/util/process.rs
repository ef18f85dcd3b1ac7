use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub current_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }
}

/// Run to completion with inherited stdio and hand the exit status back.
pub fn run(spec: CommandSpec) -> Result<ExitStatus> {
    command(&spec)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("failed to spawn `{}`", spec.program.to_string_lossy()))
}

/// Spawn without waiting. For desktop handoffs (file browser, URI schemes)
/// where the child outlives this process.
pub fn launch(spec: CommandSpec) -> Result<()> {
    command(&spec)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn `{}`", spec.program.to_string_lossy()))?;
    Ok(())
}

fn command(spec: &CommandSpec) -> Command {
    let mut command = Command::new(&spec.program);
    command.args(&spec.args);
    if let Some(dir) = &spec.current_dir {
        command.current_dir(dir);
    }
    command
}
