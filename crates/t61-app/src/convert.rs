use anyhow::{Result, bail};
use t61_core::Direction;

use crate::config::AppConfig;

/// Résultat d'une conversion unitaire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Octets produits.
    pub bytes: Vec<u8>,
    /// Caractères remplacés par '?' (toujours 0 vers UTF-8).
    pub substitutions: usize,
}

/// Convert one in-memory buffer according to `config`.
///
/// # Errors
/// Returns an error if the input is not valid in the source encoding, if the
/// output cannot be allocated, or, with `fail_on_substitution`, if any
/// character had no T.61 form.
pub fn convert_bytes(input: &[u8], config: &AppConfig) -> Result<Outcome> {
    match config.direction {
        Direction::T61ToUtf8 => Ok(Outcome {
            bytes: t61_core::transcode(config.direction, input)?,
            substitutions: 0,
        }),
        Direction::Utf8ToT61 => {
            let lossy = t61_core::utf8_to_t61_report(input)?;
            if config.fail_on_substitution && !lossy.is_exact() {
                bail!(
                    "{} caractère(s) sans équivalent T.61 (mode strict)",
                    lossy.substitutions
                );
            }
            Ok(Outcome {
                bytes: lossy.bytes,
                substitutions: lossy.substitutions,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(direction: Direction, strict: bool) -> AppConfig {
        AppConfig {
            direction,
            fail_on_substitution: strict,
            ..AppConfig::default()
        }
    }

    #[test]
    fn decodes_t61() {
        let out = convert_bytes(b"Gr\xC8u\xFBe", &config(Direction::T61ToUtf8, false)).unwrap();
        assert_eq!(out.bytes, "Grüße".as_bytes());
        assert_eq!(out.substitutions, 0);
    }

    #[test]
    fn encodes_with_substitutions() {
        let out = convert_bytes("5 €".as_bytes(), &config(Direction::Utf8ToT61, false)).unwrap();
        assert_eq!(out.bytes, b"5 ?");
        assert_eq!(out.substitutions, 1);
    }

    #[test]
    fn strict_mode_rejects_substitutions() {
        let err = convert_bytes("5 €".as_bytes(), &config(Direction::Utf8ToT61, true)).unwrap_err();
        assert!(err.to_string().contains("strict"));
        assert!(convert_bytes(b"plain", &config(Direction::Utf8ToT61, true)).is_ok());
    }

    #[test]
    fn invalid_t61_keeps_the_core_error() {
        let err = convert_bytes(b"a~", &config(Direction::T61ToUtf8, false)).unwrap_err();
        let core = err.downcast_ref::<t61_core::TranscodeError>().unwrap();
        assert!(core.is_invalid_encoding());
    }
}
