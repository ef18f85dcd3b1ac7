use anyhow::{Result, bail};
use upm_dev::cli::{RootArgs, RootCommand};
use upm_dev::scaffold;

pub fn run(command: RootCommand) -> Result<()> {
    match command {
        RootCommand::Init(args) => init(&args),
        RootCommand::Open(args) => open(&args),
        RootCommand::Status(args) => status(&args),
    }
}

fn init(args: &RootArgs) -> Result<()> {
    let root = crate::cmd::packages_root(args.root.as_deref())?;
    root.create()?;
    println!("Packages root ready at {}", root.path().display());
    Ok(())
}

fn open(args: &RootArgs) -> Result<()> {
    let root = crate::cmd::packages_root(args.root.as_deref())?;
    if !root.exists() {
        bail!(
            "packages root {} does not exist; run `upm-dev root init` first",
            root.path().display()
        );
    }
    scaffold::open_in_file_browser(root.path())
}

fn status(args: &RootArgs) -> Result<()> {
    let root = crate::cmd::packages_root(args.root.as_deref())?;
    if root.exists() {
        println!("Packages root exists at {}", root.path().display());
    } else {
        println!(
            "Packages root missing at {} (run `upm-dev root init`)",
            root.path().display()
        );
    }
    Ok(())
}
