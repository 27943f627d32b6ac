//! Result and error types of the field parser.
//!
//! # Components
//!
//! - **Fields**:
//!   - [`HeaderField`]: borrowed success value, byte ranges into the input line
//!   - [`FieldLine`]: owned success value backed by [`bytes::Bytes`]
//!
//! - **Errors**:
//!   - [`MalformedField`]: the only failure the automaton reports, an offset
//!   - [`ParseError`]: failures converting a field into `http` crate types

mod error;
mod field;

pub use error::{MalformedField, ParseError};
pub use field::{FieldLine, HeaderField};
