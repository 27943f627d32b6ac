//! Header field decoding.
//!
//! This module turns one raw header line into a field name and value. It uses a
//! byte-level state machine that follows RFC 7230 §3.2, obs-fold included.
//!
//! # Components
//!
//! - [`FieldParser`]: the field automaton
//!   - [`parse_field`]: shortcut using the no-op observer
//!   - [`FieldParser::parse_bytes`]: zero-copy variant over [`bytes::Bytes`]
//!
//! - [`chars`]: the byte classes of the grammar (token, field-vchar, whitespace)
//!
//! - [`FieldObserver`]: diagnostic hook receiving the automaton's events
//!   - [`NoopObserver`]: default, ignores everything
//!   - [`TracingObserver`]: forwards events to `tracing`

pub mod chars;
mod field_parser;
mod observer;

pub use field_parser::{FieldParser, parse_field};
pub use observer::{FieldObserver, NoopObserver, Ows, TracingObserver};
