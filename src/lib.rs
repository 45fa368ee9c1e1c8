//! Japanese legacy-charset codecs with glyph-aware conversion.
//!
//! This crate implements the `-g` family of Shift_JIS codecs: encoders that
//! fold Windows/JIS symbol variants and vendor kanji onto the cells a peer
//! actually has, a classification database that says which JIS or vendor
//! standard defines each codepoint, and kana width conversion built on
//! Unicode normalization.
//!
//! # Example
//!
//! ```
//! use jiscodec::{chardb, kana, registry, Category};
//!
//! // encode through a named codec; the Windows tilde lands on the JIS cell
//! let codec = registry::find("x-sjis-g").unwrap();
//! assert_eq!(codec.encode("～").unwrap(), vec![0x81, 0x60]);
//!
//! // ask which standard defines a character
//! assert_eq!(chardb::classify('あ' as u32), Category::JisX0208);
//!
//! // kana width conversion survives voiced marks
//! assert_eq!(kana::to_fullwidth_katakana("ｶﾞﾝﾀﾞﾑ"), "ガンダム");
//! ```

#![warn(missing_docs)]

pub mod category;
pub mod chardb;
pub mod codec;
pub mod error;
pub mod glyph;
pub mod kana;
pub mod remap;
pub mod registry;
pub mod sjis;
pub mod sjis2004;
mod tables;
pub mod windows31j;

pub use category::{Category, CategorySet};
pub use codec::{ByteCodec, CoderResult};
pub use error::CodecError;
pub use glyph::GlyphCodec;
pub use remap::RemapTable;
pub use sjis::Sjis;
pub use sjis2004::Sjis2004;
pub use windows31j::Windows31j;
