use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use toml_edit::{DocumentMut, Item, Table, value};
use upm_dev::cli::{ConfigCommand, ConfigSetArgs};
use upm_dev::config;

pub fn run(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Set(args) => set_value(&args),
    }
}

fn set_value(args: &ConfigSetArgs) -> Result<()> {
    let path = match &args.file {
        Some(path) => path.clone(),
        None => config::config_path().ok_or_else(|| {
            anyhow!("failed to resolve ~/.upm-dev/config.toml (no home directory found)")
        })?,
    };

    ensure_parent(&path)?;

    let mut doc = if path.exists() {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if raw.trim().is_empty() {
            DocumentMut::new()
        } else {
            raw.parse::<DocumentMut>()
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
    } else {
        DocumentMut::new()
    };

    apply_key(&mut doc, &args.key, &args.value)?;

    fs::write(&path, doc.to_string())
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Updated {}", path.display());
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

fn apply_key(doc: &mut DocumentMut, key: &str, value_str: &str) -> Result<()> {
    let segments = key
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>();
    if segments.is_empty() {
        bail!("config key cannot be empty");
    }

    let mut current = doc.as_table_mut();
    for segment in &segments[..segments.len() - 1] {
        current = current
            .entry(segment)
            .or_insert(Item::Table(Table::new()))
            .as_table_mut()
            .ok_or_else(|| anyhow!("path `{segment}` is not a table in the config"))?;
    }

    current.insert(segments.last().unwrap(), value(value_str));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_new_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let args = ConfigSetArgs {
            key: "defaults.package.organization".into(),
            value: "Acme".into(),
            file: Some(path.clone()),
        };
        set_value(&args).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("defaults"));
        assert!(written.contains("Acme"));
    }

    #[test]
    fn updates_nested_tables() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[defaults]
[defaults.package]
organization = "Acme"
"#,
        )
        .unwrap();

        let args = ConfigSetArgs {
            key: "defaults.package.author".into(),
            value: "Ada Lovelace".into(),
            file: Some(path.clone()),
        };
        set_value(&args).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("author = \"Ada Lovelace\""));
        assert!(written.contains("organization = \"Acme\""));
    }

    #[test]
    fn written_defaults_round_trip_through_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        for (key, val) in [
            ("defaults.package.author", "Ada Lovelace"),
            ("defaults.package.email", "ada@example.com"),
            ("defaults.package.organization", "Acme"),
        ] {
            let args = ConfigSetArgs {
                key: key.into(),
                value: val.into(),
                file: Some(path.clone()),
            };
            set_value(&args).unwrap();
        }

        let loaded = config::load_from(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(loaded.defaults.package.author.as_deref(), Some("Ada Lovelace"));
        assert_eq!(loaded.defaults.package.organization.as_deref(), Some("Acme"));
    }
}
