//! t61conv : conversion T.61 ⇄ UTF-8 en ligne de commande.

mod batch;
mod cli;
mod config;
mod convert;

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::AppConfig;

fn main() -> Result<ExitCode> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider les arguments
    cli.validate()?;

    // 4. Charger la config, puis appliquer les surcharges CLI
    let mut config = resolve_config(&cli)?;
    apply_overrides(&cli, &mut config);
    log::debug!("Configuration effective : {config:?}");

    // 5. Mode lot
    if let Some(root) = cli.batch.as_deref() {
        let out_root = cli
            .batch_out
            .clone()
            .unwrap_or_else(|| batch::default_output_dir(root, &config));
        let report = batch::run_batch(root, &out_root, &config)?;
        log::info!(
            "Lot terminé : {} converti(s), {} échec(s), {} substitution(s)",
            report.converted,
            report.failed.len(),
            report.substitutions
        );
        for (file, err) in &report.failed {
            eprintln!("{} : {err}", file.display());
        }
        return Ok(if report.is_clean() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    // 6. Lire l'entrée
    let input = read_input(cli.input.as_ref())?;

    // 7. Vérification seule
    if cli.check {
        return Ok(match t61_core::first_invalid_t61(&input) {
            None => {
                log::info!("{} octet(s) T.61 valides", input.len());
                ExitCode::SUCCESS
            }
            Some(offset) => {
                log::error!(
                    "T.61 invalide : octet 0x{:02X} à la position {offset}",
                    input[offset]
                );
                ExitCode::FAILURE
            }
        });
    }

    // 8. Conversion
    let outcome = convert::convert_bytes(&input, &config)?;
    if outcome.substitutions > 0 {
        log::warn!(
            "{} caractère(s) sans équivalent T.61 remplacé(s) par '?'",
            outcome.substitutions
        );
    }
    write_output(cli.output.as_ref(), &outcome.bytes)?;
    log::info!(
        "{} → {} octet(s) ({})",
        input.len(),
        outcome.bytes.len(),
        config.direction.name()
    );
    Ok(ExitCode::SUCCESS)
}

fn resolve_config(cli: &cli::Cli) -> Result<AppConfig> {
    if cli.config.exists() {
        config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(AppConfig::default())
    }
}

fn apply_overrides(cli: &cli::Cli, config: &mut AppConfig) {
    if let Some(direction) = cli.direction {
        config.direction = direction;
    }
    if cli.strict {
        config.fail_on_substitution = true;
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Impossible de lire {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("Lecture de l'entrée standard")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&PathBuf>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("Impossible d'écrire {}", path.display())),
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(bytes)
                .and_then(|()| out.flush())
                .context("Écriture sur la sortie standard")
        }
    }
}
