//! # Pushback ACF
//!
//! Reads the text form of X-Plane `.acf` aircraft description files into an
//! immutable property store.
//!
//! ```text
//! I
//! 1200 version
//! ACF
//! P acf/_cgZ 12.5
//! P _wing/1/_Croot 9.25
//! ...
//! PROPERTIES_END
//! ```
//!
//! Every `P` line maps a slash-delimited key to the remainder of the line.
//! Parsing stops at `PROPERTIES_END`; anything after it is ignored.

pub mod file;

pub use file::AcfFile;
