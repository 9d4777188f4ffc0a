use anyhow::{bail, Context, Result};
use std::path::Path;

use sintesis::config::SynthesisConfig;

/// `config show` — display the effective config (file merged over defaults).
pub fn run_show(config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// `config get <key>` — display a single config value.
///
/// Key uses dot notation: `scoring.phrase_bonus`, `labels.synthesis_prefix`
pub fn run_get(key: &str, config_path: Option<&Path>) -> Result<()> {
    let config = serde_json::to_value(super::load_config(config_path)?)?;

    match resolve_path(&config, key) {
        Some(v) => println!("{}", serde_json::to_string_pretty(v)?),
        None => bail!("Key not found: {}", key),
    }
    Ok(())
}

/// `config set <key> <value>` — set a value and write the config file.
///
/// Value is parsed as JSON (number, bool, string), falling back to a plain string.
/// The whole config is re-validated before it is written.
pub fn run_set(key: &str, value: &str, config_path: Option<&Path>) -> Result<()> {
    let path = super::resolve_config_path(config_path);

    let mut config: serde_json::Value = if path.exists() {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?
    } else {
        serde_json::to_value(SynthesisConfig::default())?
    };

    if resolve_path(&serde_json::to_value(SynthesisConfig::default())?, key).is_none() {
        bail!("Unknown config key: {}", key);
    }

    let parsed: serde_json::Value = serde_json::from_str(value)
        .unwrap_or(serde_json::Value::String(value.to_string()));

    set_path(&mut config, key, parsed.clone())?;

    let validated = SynthesisConfig::from_value(config)
        .with_context(|| format!("Invalid value for {}", key))?;
    validated
        .save_to(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(key = %key, path = %path.display(), "Config updated");
    println!("{} = {}", key, serde_json::to_string(&parsed)?);
    Ok(())
}

/// `config path` — print the config file location.
pub fn run_path(config_path: Option<&Path>) -> Result<()> {
    let path = super::resolve_config_path(config_path);
    let state = if path.exists() { "" } else { " (not created yet)" };
    println!("{}{}", path.display(), state);
    Ok(())
}

/// Resolve a dot-separated path in a JSON value.
fn resolve_path<'a>(value: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Set a value at a dot-separated path, creating intermediate objects as needed.
fn set_path(root: &mut serde_json::Value, path: &str, value: serde_json::Value) -> Result<()> {
    let segments: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        bail!("Empty key path");
    };

    let mut current = root;
    for segment in parents {
        if !current.is_object() {
            *current = serde_json::json!({});
        }
        let Some(obj) = current.as_object_mut() else {
            bail!("Cannot descend into {}", segment);
        };
        current = obj
            .entry(segment.to_string())
            .or_insert_with(|| serde_json::json!({}));
    }

    if !current.is_object() {
        *current = serde_json::json!({});
    }
    let Some(obj) = current.as_object_mut() else {
        bail!("Cannot set {}", path);
    };
    obj.insert(last.to_string(), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_nested() {
        let v = serde_json::to_value(SynthesisConfig::default()).unwrap();
        assert_eq!(resolve_path(&v, "scoring.phrase_bonus"), Some(&serde_json::json!(0.15)));
        assert!(resolve_path(&v, "scoring.nope").is_none());
    }

    #[test]
    fn test_set_path_creates_intermediate_objects() {
        let mut v = serde_json::json!({});
        set_path(&mut v, "selection.target_ratio", serde_json::json!(0.5)).unwrap();
        assert_eq!(v["selection"]["target_ratio"], 0.5);
    }

    #[test]
    fn test_set_persists_validated_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        run_set("selection.target_ratio", "0.5", Some(&path)).unwrap();
        let cfg = SynthesisConfig::load_from(&path).unwrap();
        assert_eq!(cfg.selection.target_ratio, 0.5);
        assert_eq!(cfg.scoring.phrase_bonus, 0.15);
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(run_set("scoring.bogus", "1", Some(&path)).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_set_refuses_to_overwrite_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let broken = r#"{"labels": {"synthesis_prefix": "Mi resumen: "}, oops"#;
        std::fs::write(&path, broken).unwrap();

        let err = run_set("selection.target_ratio", "0.5", Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
    }
}
