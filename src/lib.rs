//! Escape-aware delimited paths.
//!
//! An [EscapedPath] splits a string on a single separator character while
//! letting individual segments contain that separator (or the escape
//! character `\`) by escaping it. It also derives the same dirname, basename,
//! extension, and filename breakdown as PHP's `pathinfo()`.
//!
//! ```
//! use escpath::{EscapedPath, InfoFields, InfoValue};
//!
//! let path = EscapedPath::parse(r"/home/my\/file.txt", '/');
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.get(2), Ok("my/file.txt"));
//! assert_eq!(path.info(InfoFields::EXTENSION), InfoValue::Field("txt".to_string()));
//! assert_eq!(path.to_string(), r"/home/my\/file.txt");
//! ```

pub mod error;
pub mod escape;
pub mod info;
pub mod path;
pub mod style;

pub use error::Error;
pub use escape::{escape_name, unescape_name};
pub use info::{Info, InfoFields, InfoValue};
pub use path::EscapedPath;
pub use style::Style;
