//! A byte-level HTTP/1.1 header field parser
//!
//! This crate extracts the name and value of a single header field from one raw
//! line, following the field grammar of RFC 7230 §3.2. The deprecated obs-fold
//! line continuation is supported too. Parsing is a single pass over the line
//! with no allocation and no backtracking. It reports the exact offset of the
//! first byte that breaks the grammar.
//!
//! # Features
//!
//! - Field names restricted to RFC 7230 token characters
//! - Leading and trailing OWS trimmed, inner whitespace kept
//! - Folded values kept verbatim, CRLF and fold whitespace included
//! - Zero-copy results, borrowed ([`HeaderField`]) or shared via `bytes` ([`FieldLine`])
//! - Optional diagnostic observer, with a `tracing` adapter
//! - Conversion into `http::HeaderName` and `http::HeaderValue`
//!
//! # Example
//!
//! ```
//! use micro_http_field::{FieldParser, TracingObserver, parse_field};
//!
//! let field = parse_field(b"Host: 789\r\n 0\r\n").unwrap();
//! assert_eq!(field.name(), b"Host");
//! assert_eq!(field.value(), b"789\r\n 0");
//! assert_eq!(field.consumed(), 15);
//!
//! let mut parser = FieldParser::with_observer(TracingObserver);
//! let error = parser.parse(b"Host: 0 1 2\r\n").unwrap_err();
//! assert_eq!(error.offset(), 10);
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: the field automaton, its byte classes and the observer hook
//! - [`protocol`]: parse results and error types
//!
//! # Error Handling
//!
//! - [`protocol::MalformedField`]: the only parse failure, carrying a byte offset
//! - [`protocol::ParseError`]: failures converting a field into `http` types
//!
//! # Limitations
//!
//! - One field per call. Splitting a header block into lines, and enforcing
//!   header count or size limits, is up to the caller.
//! - Values are not interpreted: no list splitting, no quoted-string unescaping,
//!   no unfolding.

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;

pub use codec::{FieldObserver, FieldParser, NoopObserver, Ows, TracingObserver, parse_field};
pub use protocol::{FieldLine, HeaderField, MalformedField, ParseError};
