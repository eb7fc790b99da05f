//! Named makers declared in TOML.
//!
//! Blueprint parsing, lenient spec decoding and prototype resolution. The
//! configuration types live in `protoform-types::config`.

pub mod decode;
pub mod registry;

pub use decode::decode_spec;
pub use registry::BlueprintRegistry;
