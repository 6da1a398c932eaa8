//! tagutil - parse and query struct field annotations
//!
//! An annotation is a string of space-separated `key:"value"` pairs, such as
//! the tags attached to Go struct fields. Values may be comma-separated lists
//! whose first item is the "main" value and whose remaining items are
//! "options":
//!
//! ```
//! use tagutil::Tag;
//!
//! let tag = Tag::parse(r#"json:",inline,omitempty" yaml:"-""#);
//! assert_eq!(tag.first("json"), "");
//! assert!(tag.has_option("json", "inline"));
//! assert!(tag.contains("yaml", "-"));
//! assert_eq!(tag.len("xml"), 0);
//! ```
//!
//! ## Module Structure
//!
//! - `tag`: Annotation parser, quoted-literal codec and the `Tag` accessors
//! - `scan`: Annotation discovery in Go source trees
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer

pub mod cli;
pub mod config;
pub mod scan;
pub mod tag;

pub use tag::Tag;
