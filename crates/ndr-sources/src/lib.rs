//! Text extraction for ndr
//!
//! Every supported format is flattened to one string with paragraph and
//! page boundaries turned into newlines. A failed extraction is an error,
//! never a partial text.

pub mod collection;
pub mod docx;
pub mod handler;
pub mod pdf;
pub mod text;

pub use collection::{expand_glob, is_glob};
pub use handler::{SourceHandler, SourceHandlerRegistry, extension_of};
