//! Constants shared by the scanner, the collector and both output modes.
//!
//! ## Include token
//!
//! `INCLUDE_TOKEN` is matched byte for byte. A space in the token stands for
//! "any amount of whitespace, including none", so `include('a.js')`,
//! `include ('a.js')` and `include(\n  'a.js')` all match. The token must be
//! followed directly by a `'` or `"` quote.

/// Directive keyword and opening parenthesis of an include
pub const INCLUDE_TOKEN: &[u8] = b"include ( ";

/// Root-relative path of the file whose inclusion pulls in the sayings cascade
pub const MARKER_FILE: &str = "Sayings/Base.js";

/// Directory name holding locale resources at any level of the tree
pub const SAYINGS_DIR: &str = "Sayings";

/// Language code meaning "every language, resolved by the runtime"
pub const MULTI_LANG: &str = "multi";

/// Extension of script sources (the only files walked and scanned)
pub const SCRIPT_EXTENSION: &str = "js";

/// Extension of stylesheet sources (bundled into the style stream)
pub const STYLE_EXTENSION: &str = "css";
