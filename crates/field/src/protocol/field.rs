//! Parsed header field representations.
//!
//! [`HeaderField`] borrows from the line it was parsed from and only records byte
//! ranges, the same index-based approach the request decoder uses for header
//! names and values. [`FieldLine`] is the owned form, built from `Bytes::slice`
//! so it shares the caller's buffer instead of copying it.

use std::ops::Range;

use bytes::Bytes;
use http::{HeaderName, HeaderValue};

use crate::protocol::ParseError;

/// A successfully parsed header field borrowing from its input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField<'a> {
    line: &'a [u8],
    name: Range<usize>,
    value: Range<usize>,
    consumed: usize,
}

impl<'a> HeaderField<'a> {
    pub(crate) fn new(line: &'a [u8], name: Range<usize>, value: Range<usize>, consumed: usize) -> Self {
        Self { line, name, value, consumed }
    }

    /// The field name, always non-empty.
    pub fn name(&self) -> &'a [u8] {
        &self.line[self.name.clone()]
    }

    /// The field value without leading and trailing whitespace.
    ///
    /// Folded continuation lines are kept verbatim, so the value may contain
    /// `CRLF` followed by the fold whitespace.
    pub fn value(&self) -> &'a [u8] {
        &self.line[self.value.clone()]
    }

    pub fn name_range(&self) -> Range<usize> {
        self.name.clone()
    }

    pub fn value_range(&self) -> Range<usize> {
        self.value.clone()
    }

    /// Number of input bytes consumed, up to and including the terminating CRLF.
    ///
    /// Bytes from this offset on were not inspected, apart from the one byte of
    /// lookahead that rules out another obs-fold.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Whether the value spans an obs-fold.
    pub fn is_folded(&self) -> bool {
        // CR is a CTL, it only reaches a value through a fold
        self.value().contains(&b'\r')
    }

    /// Converts into `http` crate types, validating with their own rules.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] for folded values, since
    /// [`HeaderValue`] does not allow CR or LF.
    pub fn to_http(&self) -> Result<(HeaderName, HeaderValue), ParseError> {
        let name = HeaderName::from_bytes(self.name())?;
        let value = HeaderValue::from_bytes(self.value())?;
        Ok((name, value))
    }

    /// Builds the owned form, `buf` must hold the bytes this field was parsed from.
    pub(crate) fn to_field_line(&self, buf: &Bytes) -> FieldLine {
        FieldLine { name: buf.slice(self.name.clone()), value: buf.slice(self.value.clone()) }
    }
}

/// An owned header field sharing the buffer it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLine {
    name: Bytes,
    value: Bytes,
}

impl FieldLine {
    pub fn name(&self) -> &Bytes {
        &self.name
    }

    pub fn value(&self) -> &Bytes {
        &self.value
    }

    pub fn into_parts(self) -> (Bytes, Bytes) {
        (self.name, self.value)
    }

    /// Converts into `http` crate types without copying the value.
    ///
    /// # Errors
    ///
    /// Same rules as [`HeaderField::to_http`].
    pub fn into_http(self) -> Result<(HeaderName, HeaderValue), ParseError> {
        let name = HeaderName::from_bytes(&self.name)?;
        let value = HeaderValue::from_maybe_shared(self.value)?;
        Ok((name, value))
    }
}
