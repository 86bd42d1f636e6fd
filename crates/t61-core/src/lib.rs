//! T.61 ⇄ UTF-8 transcoding core.
//!
//! Lossless expansion of T.61 (teletext, leading non-spacing accents) into
//! UTF-8 and lossy collapse of Unicode back into the T.61 repertoire, over
//! static lookup tables.

pub mod codec;
pub mod direction;
pub mod error;
pub mod sink;
pub mod tables;
pub mod to_t61;
pub mod to_utf8;
pub mod validity;

pub use direction::{Direction, transcode};
pub use error::TranscodeError;
pub use to_t61::{
    Lossy, str_to_t61, str_to_t61_report, utf8_t61_len, utf8_to_t61, utf8_to_t61_report,
};
pub use to_utf8::{t61_to_string, t61_to_utf8, t61_utf8_len};
pub use validity::{first_invalid_t61, t61_is_valid};
