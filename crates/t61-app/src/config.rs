use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use t61_core::Direction;

/// Configuration de conversion.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AppConfig {
    /// Sens de conversion quand `--direction` est absent.
    pub direction: Direction,
    /// Refuser une conversion UTF-8 → T.61 qui a dû écrire des '?'.
    pub fail_on_substitution: bool,
    /// Réglages du mode lot.
    pub batch: BatchConfig,
}

/// Batch-mode settings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BatchConfig {
    /// Extensions traitées (minuscules, sans point).
    pub extensions: Vec<String>,
    /// Descendre dans les sous-dossiers.
    pub recursive: bool,
    /// Extension des fichiers produits. None = même nom que la source.
    pub output_extension: Option<String>,
    /// Continue with the remaining files when one fails.
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["t61".into(), "txt".into(), "ldif".into()],
            recursive: true,
            output_extension: None,
            continue_on_error: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            direction: Direction::T61ToUtf8,
            fail_on_substitution: false,
            batch: BatchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Normalise extensions after TOML deserialization: lower case, no
    /// leading dot, no empties, no duplicates.
    pub fn sanitize(&mut self) {
        let mut seen = Vec::with_capacity(self.batch.extensions.len());
        for ext in self.batch.extensions.drain(..) {
            let ext = ext.trim().trim_start_matches('.').to_lowercase();
            if !ext.is_empty() && !seen.contains(&ext) {
                seen.push(ext);
            }
        }
        self.batch.extensions = seen;
        self.batch.output_extension = self
            .batch
            .output_extension
            .take()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty());
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    convert: Option<ConvertSection>,
    batch: Option<BatchSection>,
}

/// Convert section, all fields optional for partial override.
#[derive(Deserialize)]
struct ConvertSection {
    direction: Option<Direction>,
    fail_on_substitution: Option<bool>,
}

/// Batch section, all fields optional.
#[derive(Deserialize)]
struct BatchSection {
    extensions: Option<Vec<String>>,
    recursive: Option<bool>,
    output_extension: Option<String>,
    continue_on_error: Option<bool>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this schema.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;
    let mut config = AppConfig::default();

    if let Some(c) = file.convert {
        if let Some(v) = c.direction {
            config.direction = v;
        }
        if let Some(v) = c.fail_on_substitution {
            config.fail_on_substitution = v;
        }
    }

    if let Some(b) = file.batch {
        if let Some(v) = b.extensions {
            config.batch.extensions = v;
        }
        if let Some(v) = b.recursive {
            config.batch.recursive = v;
        }
        if b.output_extension.is_some() {
            config.batch.output_extension = b.output_extension;
        }
        if let Some(v) = b.continue_on_error {
            config.batch.continue_on_error = v;
        }
    }

    config.sanitize();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Configuration invalide : {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = parse_config(
            r#"
            [convert]
            direction = "Utf8ToT61"

            [batch]
            recursive = false
            "#,
        )
        .unwrap();
        assert_eq!(config.direction, Direction::Utf8ToT61);
        assert!(!config.fail_on_substitution);
        assert!(!config.batch.recursive);
        assert_eq!(config.batch.extensions, BatchConfig::default().extensions);
    }

    #[test]
    fn extensions_are_sanitized() {
        let config = parse_config(
            r#"
            [batch]
            extensions = [".T61", "t61", " LDIF ", ""]
            output_extension = ".utf8"
            "#,
        )
        .unwrap();
        assert_eq!(config.batch.extensions, vec!["t61", "ldif"]);
        assert_eq!(config.batch.output_extension.as_deref(), Some("utf8"));
    }

    #[test]
    fn unknown_direction_is_an_error() {
        assert!(parse_config("[convert]\ndirection = \"Latin1\"").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_config(Path::new("/nonexistent/t61conv.toml")).unwrap_err();
        assert!(err.to_string().contains("Impossible de lire"));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[convert]\nfail_on_substitution = true\n").unwrap();
        assert!(load_config(&path).unwrap().fail_on_substitution);
    }
}
