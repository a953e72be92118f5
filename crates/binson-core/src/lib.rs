//! # binson-core
//!
//! Pure-Rust encoder and decoder for **Binson**, an exceptionally simple
//! binary data serialization format (see binson.org).
//!
//! Binson plays the role JSON plays for text: a tree of typed values —
//! objects, arrays, integers, UTF-8 text, raw bytes, booleans, doubles —
//! with a deterministic byte encoding. Every value carries an explicit tag
//! byte, containers are terminator-delimited, and integers and length
//! prefixes are packed at their minimal width, so two trees with equal
//! content always encode to identical bytes regardless of how they were
//! built.
//!
//! ## Quick start
//!
//! ```rust
//! use binson_core::{decode, Object};
//!
//! let obj = Object::new().put("cid", 4);
//! let bytes = obj.to_bytes();
//! assert_eq!(bytes, [0x40, 0x14, 0x03, 0x63, 0x69, 0x64, 0x10, 0x04, 0x41]);
//!
//! let back = decode(&bytes).unwrap();
//! assert_eq!(back.get_integer("cid"), Some(4));
//! ```
//!
//! ## Modules
//!
//! - [`types`] — the [`Value`] tree and the [`Object`]/[`Array`] builder API
//! - [`pack`] — tag grammar and minimal-width integer packing
//! - [`encoder`] — value tree → canonical bytes (cannot fail)
//! - [`decoder`] — bytes → value tree, with typed failures
//! - [`error`] — [`DecodeError`] and the crate [`Result`] alias

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod pack;
pub mod types;

pub use decoder::decode;
pub use encoder::encode;
pub use error::{DecodeError, Result};
pub use types::{Array, Object, Value};
