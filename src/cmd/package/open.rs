use anyhow::{Result, ensure};
use upm_dev::cli::PackageOpenArgs;
use upm_dev::scaffold;

pub fn run_open(args: &PackageOpenArgs) -> Result<()> {
    let root = crate::cmd::packages_root(args.root.as_deref())?;
    let target = match &args.name {
        Some(name) => {
            let path = root.package_path(name);
            ensure!(
                path.is_dir(),
                "no package named {name} under {}",
                root.path().display()
            );
            path
        }
        None => {
            ensure!(
                root.exists(),
                "packages root {} does not exist; run `upm-dev root init` first",
                root.path().display()
            );
            root.path().to_path_buf()
        }
    };
    scaffold::open_in_file_browser(&target)
}
