//! Vecql Core: shared types for the vecql query layer
//!
//! This crate holds the pieces of vecql that do not touch SQL text:
//! - Codec: little-endian float32 blob encoding understood by sqlite-vec
//! - Math: distance and similarity helpers for application code
//! - Vector: an owned vector value with blob/JSON conversions
//! - Config: extension loading configuration

pub mod codec;
pub mod config;
pub mod error;
pub mod math;
pub mod types;

pub use codec::{decode, decode_exact, encode, encode_f32};
pub use config::ExtensionConfig;
pub use error::{Result, VecqlError};
pub use types::Vector;
