//! Line-based text format for drawings.
//!
//! ```text
//! LINE x1 y1 x2 y2 r g b
//! CIRCLE cx cy radius r g b
//! FCIRCLE cx cy radius fr fg fb br bg bb
//! ```
//!
//! One shape per line, single-space separated, every line newline-terminated.

mod reader;
mod writer;

pub use reader::{parse_document, parse_line};
pub use writer::{Serializer, serialize_shape};

pub const LINE_TAG: &str = "LINE";
pub const CIRCLE_TAG: &str = "CIRCLE";
pub const FILLED_CIRCLE_TAG: &str = "FCIRCLE";
