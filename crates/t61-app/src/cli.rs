use std::path::PathBuf;

use clap::Parser;
use t61_core::Direction;

/// t61conv : conversion T.61 (télétex) ⇄ UTF-8.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier d'entrée. Défaut : entrée standard.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Fichier de sortie. Défaut : sortie standard.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sens de conversion : "t61-to-utf8" ou "utf8-to-t61".
    #[arg(short, long, value_parser = parse_direction)]
    pub direction: Option<Direction>,

    /// Vérifier seulement que l'entrée est du T.61 valide.
    #[arg(long, default_value_t = false)]
    pub check: bool,

    /// Convertir tous les fichiers reconnus d'un dossier.
    #[arg(long)]
    pub batch: Option<PathBuf>,

    /// Dossier de sortie du mode lot. Défaut : <dossier>-<sens>.
    #[arg(long)]
    pub batch_out: Option<PathBuf>,

    /// Échouer si un caractère n'a pas d'équivalent T.61.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn parse_direction(name: &str) -> Result<Direction, String> {
    Direction::from_name(name)
        .ok_or_else(|| format!("sens inconnu : {name} (t61-to-utf8 ou utf8-to-t61)"))
}

impl Cli {
    /// Reject argument combinations that make no sense together.
    ///
    /// # Errors
    /// Returns an error if batch mode is mixed with single-file options.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.batch.is_some() {
            if self.input.is_some() || self.output.is_some() {
                anyhow::bail!(
                    "--batch est incompatible avec --input/--output. Utilisez --batch-out."
                );
            }
            if self.check {
                anyhow::bail!("--check ne s'applique qu'à une entrée unique.");
            }
        } else if self.batch_out.is_some() {
            anyhow::bail!("--batch-out requiert --batch.");
        }
        Ok(())
    }
}
