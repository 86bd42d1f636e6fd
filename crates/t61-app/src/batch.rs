use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::{AppConfig, BatchConfig};
use crate::convert::{Outcome, convert_bytes};

/// Bilan d'un traitement par lots.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Fichiers convertis avec succès.
    pub converted: usize,
    /// Fichiers en échec, avec le message d'erreur.
    pub failed: Vec<(PathBuf, String)>,
    /// Total des caractères remplacés par '?'.
    pub substitutions: usize,
}

impl BatchReport {
    /// True when no file failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Dossier de sortie par défaut : `<dossier>-<sens>`, à côté de la source.
#[must_use]
pub fn default_output_dir(root: &Path, config: &AppConfig) -> PathBuf {
    let root: PathBuf = root.components().collect();
    let mut name = root.into_os_string();
    name.push("-");
    name.push(config.direction.name());
    PathBuf::from(name)
}

/// Liste triée des fichiers à convertir sous `root`.
///
/// # Errors
/// Returns an error if a directory cannot be read.
pub fn collect_files(root: &Path, batch: &BatchConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("Dossier introuvable : {}", root.display());
    }
    let mut files = Vec::new();
    scan_dir(root, batch, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_dir(dir: &Path, batch: &BatchConfig, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("Lecture de {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            if batch.recursive {
                scan_dir(&path, batch, files)?;
            }
        } else if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            let ext = ext.to_lowercase();
            if batch.extensions.contains(&ext) {
                files.push(path);
            }
        }
    }
    Ok(())
}

/// Absolute form of `path` with links and `..` resolved.
///
/// The path need not exist yet: its nearest existing ancestor is
/// canonicalized and the missing tail is appended lexically.
fn resolve_dir(path: &Path) -> Result<PathBuf> {
    let path = std::path::absolute(path)
        .with_context(|| format!("Chemin invalide : {}", path.display()))?;
    let mut existing = path.as_path();
    let mut tail = Vec::new();
    while !existing.exists() {
        let Some(parent) = existing.parent() else {
            break;
        };
        tail.extend(existing.components().next_back());
        existing = parent;
    }
    let mut resolved = fs::canonicalize(existing)
        .with_context(|| format!("Chemin invalide : {}", existing.display()))?;
    for component in tail.into_iter().rev() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => resolved.push(name),
            _ => {}
        }
    }
    Ok(resolved)
}

/// Chemin de sortie miroir : même chemin relatif sous `out_root`.
fn output_path(file: &Path, root: &Path, out_root: &Path, batch: &BatchConfig) -> PathBuf {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let mut target = out_root.join(relative);
    if let Some(ext) = &batch.output_extension {
        target.set_extension(ext);
    }
    target
}

fn convert_file(file: &Path, target: &Path, config: &AppConfig) -> Result<Outcome> {
    let input = fs::read(file).with_context(|| format!("Impossible de lire {}", file.display()))?;
    let outcome = convert_bytes(&input, config)?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Impossible de créer {}", parent.display()))?;
    }
    fs::write(target, &outcome.bytes)
        .with_context(|| format!("Impossible d'écrire {}", target.display()))?;
    Ok(outcome)
}

/// Convertit en parallèle tous les fichiers reconnus sous `root`.
///
/// Les chemins relatifs sont conservés sous `out_root`. Avec
/// `continue_on_error`, les échecs sont collectés dans le bilan ; sinon le
/// premier échec interrompt le lot.
///
/// # Errors
/// Returns an error if the folder cannot be scanned, if the output folder
/// would overwrite the sources, or on the first failure when
/// `continue_on_error` is off.
pub fn run_batch(root: &Path, out_root: &Path, config: &AppConfig) -> Result<BatchReport> {
    if !root.is_dir() {
        anyhow::bail!("Dossier introuvable : {}", root.display());
    }
    let root = &resolve_dir(root)?;
    let out_root = &resolve_dir(out_root)?;
    if out_root == root && config.batch.output_extension.is_none() {
        anyhow::bail!(
            "Le dossier de sortie est le dossier source : {}. Choisissez --batch-out ou output_extension.",
            root.display()
        );
    }

    let files: Vec<PathBuf> = collect_files(root, &config.batch)?
        .into_iter()
        .filter(|f| out_root == root || !f.starts_with(out_root))
        .collect();
    log::info!(
        "{} fichier(s) à convertir ({}) dans {}",
        files.len(),
        config.direction.name(),
        root.display()
    );

    let run_one = |file: &PathBuf| -> Result<Outcome> {
        let target = output_path(file, root, out_root, &config.batch);
        let outcome = convert_file(file, &target, config)
            .with_context(|| format!("Échec sur {}", file.display()))?;
        if outcome.substitutions > 0 {
            log::warn!(
                "{} : {} caractère(s) remplacé(s) par '?'",
                file.display(),
                outcome.substitutions
            );
        }
        log::info!("{} → {}", file.display(), target.display());
        Ok(outcome)
    };

    let mut report = BatchReport::default();
    if config.batch.continue_on_error {
        let results: Vec<(&PathBuf, Result<Outcome>)> =
            files.par_iter().map(|f| (f, run_one(f))).collect();
        for (file, result) in results {
            match result {
                Ok(outcome) => {
                    report.converted += 1;
                    report.substitutions += outcome.substitutions;
                }
                Err(e) => {
                    log::error!("{e:#}");
                    report.failed.push((file.clone(), format!("{e:#}")));
                }
            }
        }
    } else {
        let outcomes: Vec<Outcome> = files.par_iter().map(run_one).collect::<Result<_>>()?;
        report.converted = outcomes.len();
        report.substitutions = outcomes.iter().map(|o| o.substitutions).sum();
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use t61_core::Direction;

    fn write(path: &Path, bytes: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, bytes).unwrap();
    }

    #[test]
    fn collects_matching_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("b.t61"), b"b");
        write(&root.join("a.T61"), b"a");
        write(&root.join("skip.bin"), b"x");
        write(&root.join("sub/c.ldif"), b"c");

        let files = collect_files(root, &BatchConfig::default()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.T61"),
                PathBuf::from("b.t61"),
                PathBuf::from("sub/c.ldif")
            ]
        );

        let flat = BatchConfig {
            recursive: false,
            ..BatchConfig::default()
        };
        assert_eq!(collect_files(root, &flat).unwrap().len(), 2);
    }

    #[test]
    fn missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_files(&dir.path().join("absent"), &BatchConfig::default()).is_err());
    }

    #[test]
    fn default_output_dir_appends_direction() {
        let config = AppConfig::default();
        assert_eq!(
            default_output_dir(Path::new("data/in/"), &config),
            PathBuf::from("data/in-t61-to-utf8")
        );
    }

    #[test]
    fn converts_tree_and_mirrors_paths() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("in");
        let out = dir.path().join("out");
        write(&root.join("one.t61"), b"Gr\xC8u\xFBe");
        write(&root.join("nested/two.t61"), b"caf\xC2e");

        let config = AppConfig {
            batch: BatchConfig {
                output_extension: Some("txt".into()),
                ..BatchConfig::default()
            },
            ..AppConfig::default()
        };
        let report = run_batch(&root, &out, &config).unwrap();
        assert_eq!(report.converted, 2);
        assert!(report.is_clean());
        assert_eq!(fs::read_to_string(out.join("one.txt")).unwrap(), "Grüße");
        assert_eq!(fs::read_to_string(out.join("nested/two.txt")).unwrap(), "café");
    }

    #[test]
    fn failures_are_collected_when_continuing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("in");
        let out = dir.path().join("out");
        write(&root.join("good.t61"), b"ok");
        write(&root.join("bad.t61"), b"a~");

        let report = run_batch(&root, &out, &AppConfig::default()).unwrap();
        assert_eq!(report.converted, 1);
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].0.ends_with("bad.t61"));
        assert!(out.join("good.t61").exists());
    }

    #[test]
    fn first_failure_aborts_when_not_continuing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("in");
        write(&root.join("bad.t61"), b"a~");

        let mut config = AppConfig::default();
        config.batch.continue_on_error = false;
        assert!(run_batch(&root, &dir.path().join("out"), &config).is_err());
    }

    #[test]
    fn counts_substitutions_when_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("in");
        let out = dir.path().join("out");
        write(&root.join("price.txt"), "10 € et 5 ¥".as_bytes());

        let config = AppConfig {
            direction: Direction::Utf8ToT61,
            ..AppConfig::default()
        };
        let report = run_batch(&root, &out, &config).unwrap();
        assert_eq!(report.substitutions, 1);
        assert_eq!(fs::read(out.join("price.txt")).unwrap(), b"10 ? et 5 \xA5");
    }

    #[test]
    fn refuses_to_overwrite_sources() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("a.t61"), b"a");
        assert!(run_batch(dir.path(), dir.path(), &AppConfig::default()).is_err());
    }

    #[test]
    fn refuses_another_spelling_of_the_source_folder() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("in");
        write(&root.join("a.t61"), b"caf\xC2e");

        let aliases = [
            root.join("..").join("in"),
            root.join("."),
            root.join("missing").join(".."),
        ];
        for alias in &aliases {
            assert!(
                run_batch(&root, alias, &AppConfig::default()).is_err(),
                "{}",
                alias.display()
            );
        }
        assert_eq!(fs::read(root.join("a.t61")).unwrap(), b"caf\xC2e");
    }

    #[test]
    fn output_inside_the_source_is_not_rescanned() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("in");
        write(&root.join("a.t61"), b"a");
        write(&root.join("out/old.t61"), b"old");

        let report = run_batch(&root, &root.join("sub/../out"), &AppConfig::default()).unwrap();
        assert_eq!(report.converted, 1);
        assert!(root.join("out/a.t61").exists());
    }
}
