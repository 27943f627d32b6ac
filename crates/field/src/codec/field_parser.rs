//! Parser for a single HTTP/1.1 header field line.
//!
//! This module implements the field grammar of
//! [RFC 7230 Section 3.2](https://tools.ietf.org/html/rfc7230#section-3.2),
//! obsolete line folding included:
//!
//! ```text
//! header-field   = field-name ":" OWS field-value OWS CRLF
//! field-name     = token
//! field-value    = *( field-content / obs-fold )
//! field-content  = field-vchar [ 1*( SP / HTAB ) field-vchar ]
//! obs-fold       = CRLF 1*( SP / HTAB )
//! ```
//!
//! The line is scanned once, left to right, one byte per transition. The only
//! lookahead is the byte after a CRLF, which tells an obs-fold (SP or HTAB) apart
//! from the end of the line.
//!
//! Only value-bearing spans (field-content and obs-fold) move the recorded end of
//! the value. Whitespace moves the cursor but not the value end, so trailing OWS
//! drops out of the value while whitespace between two spans stays in it.

use std::ops::Range;

use bytes::Bytes;

use super::chars::{is_field_vchar, is_token_char, is_ws};
use super::observer::{FieldObserver, NoopObserver, Ows};
use crate::ensure;
use crate::protocol::{FieldLine, HeaderField, MalformedField};
use FieldState::*;

/// Parses one header field line with the no-op observer.
///
/// # Errors
///
/// Returns [`MalformedField`] with the offset of the first byte that has no valid
/// transition, or the line length if the line ends before its CRLF.
///
/// # Example
///
/// ```
/// use micro_http_field::parse_field;
///
/// let field = parse_field(b"Host:  00 333 45  \r\n").unwrap();
/// assert_eq!(field.name(), b"Host");
/// assert_eq!(field.value(), b"00 333 45");
///
/// let error = parse_field(b"Host: 0 1 2\r\n").unwrap_err();
/// assert_eq!(error.offset(), 10);
/// ```
pub fn parse_field(line: &[u8]) -> Result<HeaderField<'_>, MalformedField> {
    FieldParser::new().parse(line)
}

/// Header field parser carrying an optional [`FieldObserver`].
///
/// The parser holds no state between lines besides its observer, each call to
/// [`FieldParser::parse`] starts from scratch.
#[derive(Debug, Default, Clone)]
pub struct FieldParser<O = NoopObserver> {
    observer: O,
}

impl FieldParser {
    pub fn new() -> Self {
        Self { observer: NoopObserver }
    }
}

impl<O: FieldObserver> FieldParser<O> {
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Parses `line`, which must start with the field name and contain its CRLF.
    ///
    /// # Returns
    ///
    /// - `Ok(field)` with the name, the trimmed value and the number of consumed bytes
    /// - `Err(MalformedField)` with the offset where the line stopped matching the grammar
    ///
    /// # Errors
    ///
    /// Fails on any byte outside the class the current state expects, and on a
    /// line that ends before its terminating CRLF. Nothing is recovered, a failure
    /// carries no partial field.
    pub fn parse<'a>(&mut self, line: &'a [u8]) -> Result<HeaderField<'a>, MalformedField> {
        let outcome = scan(line, &mut self.observer);
        self.observer.finished(outcome.as_ref());
        outcome
    }

    /// Same as [`FieldParser::parse`], returning a field that shares `buf`.
    ///
    /// # Errors
    ///
    /// Same as [`FieldParser::parse`].
    pub fn parse_bytes(&mut self, buf: &Bytes) -> Result<FieldLine, MalformedField> {
        self.parse(buf.as_ref()).map(|field| field.to_field_line(buf))
    }
}

/// States of the field automaton.
///
/// `PreValue` is the start phase of the value: leading OWS is skipped and nothing
/// is recorded. The first field-vchar or obs-fold switches to the continuation
/// phase (`Value`, `PostValue`, `Fold`), where every value-bearing span moves the
/// value end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    /// Read token chars up to the colon
    Name,
    /// Skip OWS after the colon
    PreValue,
    /// Read field-content
    Value(ContentStep),
    /// Whitespace after a closed field-content, only OWS CRLF may follow
    PostValue,
    /// Read LF after CR
    ValueLf,
    /// CRLF read, the next byte decides between obs-fold and end of line
    LineEnd,
    /// Read the whitespace of an obs-fold
    Fold,
    /// Field accepted
    Final,
}

/// Position inside a `field-vchar [ RWS field-vchar ]` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentStep {
    /// A field-vchar opening a span was read
    Head,
    /// Whitespace after a head: RWS if a field-vchar follows, trailing OWS otherwise
    Rws,
    /// The field-vchar closing a span was read, the span allows no more whitespace
    Tail,
}

fn scan<'a, O: FieldObserver>(line: &'a [u8], observer: &mut O) -> Result<HeaderField<'a>, MalformedField> {
    let mut scanner = Scanner::new(observer);
    let mut state = Name;
    let mut consumed = line.len();

    for (cursor, &byte) in line.iter().enumerate() {
        state = state.step(byte, cursor, &mut scanner)?;
        if state == Final {
            // the lookahead byte belongs to the next line
            consumed = cursor;
            break;
        }
    }

    // running out of input is only fine right after a CRLF
    ensure!(matches!(state, LineEnd | Final), MalformedField::at(line.len()));

    Ok(scanner.finish(line, consumed))
}

/// Position markers of a single scan plus the observer to report them to.
struct Scanner<'o, O> {
    name_end: usize,
    value: Option<Range<usize>>,
    /// offset of the CR of the most recent CRLF
    line_end: usize,
    observer: &'o mut O,
}

impl<'o, O: FieldObserver> Scanner<'o, O> {
    fn new(observer: &'o mut O) -> Self {
        Self { name_end: 0, value: None, line_end: 0, observer }
    }

    fn end_name(&mut self, colon: usize) {
        self.name_end = colon;
        self.observer.name_parsed(0..colon);
    }

    /// Records a value-bearing span ending at `end`, `start` is only used by the
    /// first span of the value.
    fn extend_value(&mut self, start: usize, end: usize) {
        let value = match self.value.take() {
            Some(value) => value.start..end,
            None => {
                let leading = self.name_end + 1..start;
                if !leading.is_empty() {
                    self.observer.ows_skipped(Ows::Leading, leading);
                }
                start..end
            }
        };
        self.value = Some(value.clone());
        self.observer.value_extended(value);
    }

    fn end_line(&mut self, cr: usize) {
        self.line_end = cr;
    }

    fn finish<'a>(self, line: &'a [u8], consumed: usize) -> HeaderField<'a> {
        let (value, kind, skipped) = match self.value {
            Some(value) => {
                let trailing = value.end..self.line_end;
                (value, Ows::Trailing, trailing)
            }
            None => (self.line_end..self.line_end, Ows::Leading, self.name_end + 1..self.line_end),
        };

        if !skipped.is_empty() {
            self.observer.ows_skipped(kind, skipped);
        }

        HeaderField::new(line, 0..self.name_end, value, consumed)
    }
}

impl FieldState {
    /// Feeds one byte to the automaton.
    ///
    /// # Arguments
    /// * `byte` - The byte at `cursor`
    /// * `cursor` - Offset of `byte` in the line
    /// * `scanner` - Markers recorded so far
    ///
    /// # Returns
    /// The next state, or the failure at `cursor` if this state has no
    /// transition for `byte`
    fn step<O: FieldObserver>(
        self,
        byte: u8,
        cursor: usize,
        scanner: &mut Scanner<'_, O>,
    ) -> Result<FieldState, MalformedField> {
        match self {
            Name => Self::read_name(byte, cursor, scanner),
            PreValue => Self::read_pre_value(byte, cursor, scanner),
            Value(step) => Self::read_content(step, byte, cursor, scanner),
            PostValue => Self::read_post_value(byte, cursor, scanner),
            ValueLf => Self::read_value_lf(byte, cursor),
            LineEnd => Ok(Self::read_line_end(byte, cursor, scanner)),
            Fold => Self::read_fold(byte, cursor, scanner),
            Final => Ok(Final),
        }
    }

    /// Reads the field name.
    ///
    /// # State Transitions
    /// - On token char: Stay in Name state
    /// - On colon after at least one token char: Move to PreValue state
    /// - On any other byte, or a colon at offset 0: Return error
    fn read_name<O: FieldObserver>(
        byte: u8,
        cursor: usize,
        scanner: &mut Scanner<'_, O>,
    ) -> Result<FieldState, MalformedField> {
        match byte {
            b if is_token_char(b) => Ok(Name),
            b':' if cursor > 0 => {
                scanner.end_name(cursor);
                Ok(PreValue)
            }
            _ => Err(MalformedField::at(cursor)),
        }
    }

    /// Skips the OWS between colon and value.
    ///
    /// # State Transitions
    /// - On tab/space: Stay in PreValue state
    /// - On field-vchar: Start the value, move to Value(Head) state
    /// - On CR: The value is empty, move to ValueLf state
    /// - On any other byte: Return error
    fn read_pre_value<O: FieldObserver>(
        byte: u8,
        cursor: usize,
        scanner: &mut Scanner<'_, O>,
    ) -> Result<FieldState, MalformedField> {
        match byte {
            b if is_ws(b) => Ok(PreValue),
            b if is_field_vchar(b) => {
                scanner.extend_value(cursor, cursor + 1);
                Ok(Value(ContentStep::Head))
            }
            b'\r' => {
                scanner.end_line(cursor);
                Ok(ValueLf)
            }
            _ => Err(MalformedField::at(cursor)),
        }
    }

    /// Reads field-content, one `field-vchar [ RWS field-vchar ]` span at a time.
    ///
    /// A field-vchar right after a head or a tail opens a new span. Whitespace
    /// after a head is held back as possible RWS, whitespace after a tail can only
    /// be trailing, so `a b c` fails at `c` while `ab c` is fine.
    ///
    /// # State Transitions
    /// - Head, on field-vchar: Open a new span, stay in Value(Head) state
    /// - Head, on tab/space: Move to Value(Rws) state
    /// - Rws, on tab/space: Stay in Value(Rws) state
    /// - Rws, on field-vchar: Close the span, move to Value(Tail) state
    /// - Tail, on field-vchar: Open a new span, move to Value(Head) state
    /// - Tail, on tab/space: Move to PostValue state
    /// - Any step, on CR: Move to ValueLf state
    /// - On any other byte: Return error
    fn read_content<O: FieldObserver>(
        step: ContentStep,
        byte: u8,
        cursor: usize,
        scanner: &mut Scanner<'_, O>,
    ) -> Result<FieldState, MalformedField> {
        match (step, byte) {
            (ContentStep::Head | ContentStep::Tail, b) if is_field_vchar(b) => {
                scanner.extend_value(cursor, cursor + 1);
                Ok(Value(ContentStep::Head))
            }
            (ContentStep::Rws, b) if is_field_vchar(b) => {
                scanner.extend_value(cursor, cursor + 1);
                Ok(Value(ContentStep::Tail))
            }
            (ContentStep::Head | ContentStep::Rws, b) if is_ws(b) => Ok(Value(ContentStep::Rws)),
            (ContentStep::Tail, b) if is_ws(b) => Ok(PostValue),
            (_, b'\r') => {
                scanner.end_line(cursor);
                Ok(ValueLf)
            }
            _ => Err(MalformedField::at(cursor)),
        }
    }

    /// Skips trailing OWS after a closed span.
    ///
    /// # State Transitions
    /// - On tab/space: Stay in PostValue state
    /// - On CR: Move to ValueLf state
    /// - On any other byte: Return error
    fn read_post_value<O: FieldObserver>(
        byte: u8,
        cursor: usize,
        scanner: &mut Scanner<'_, O>,
    ) -> Result<FieldState, MalformedField> {
        match byte {
            b if is_ws(b) => Ok(PostValue),
            b'\r' => {
                scanner.end_line(cursor);
                Ok(ValueLf)
            }
            _ => Err(MalformedField::at(cursor)),
        }
    }

    /// Validates the LF after a CR.
    ///
    /// # State Transitions
    /// - On LF: Move to LineEnd state
    /// - On any other byte: Return error
    fn read_value_lf(byte: u8, cursor: usize) -> Result<FieldState, MalformedField> {
        match byte {
            b'\n' => Ok(LineEnd),
            _ => Err(MalformedField::at(cursor)),
        }
    }

    /// Looks at the byte following a CRLF.
    ///
    /// This transition never fails: a byte that does not continue the field is
    /// left for the caller, it is the start of whatever follows the line.
    ///
    /// # State Transitions
    /// - On tab/space: The CRLF was an obs-fold, record it and move to Fold state
    /// - On any other byte: Move to Final state without consuming the byte
    fn read_line_end<O: FieldObserver>(byte: u8, cursor: usize, scanner: &mut Scanner<'_, O>) -> FieldState {
        if is_ws(byte) {
            scanner.observer.fold_found(scanner.line_end);
            scanner.extend_value(scanner.line_end, cursor + 1);
            Fold
        } else {
            Final
        }
    }

    /// Reads the whitespace of an obs-fold, all of which belongs to the value.
    ///
    /// # State Transitions
    /// - On tab/space: Extend the fold, stay in Fold state
    /// - On field-vchar: Open a span, move to Value(Head) state
    /// - On CR: Move to ValueLf state
    /// - On any other byte: Return error
    fn read_fold<O: FieldObserver>(
        byte: u8,
        cursor: usize,
        scanner: &mut Scanner<'_, O>,
    ) -> Result<FieldState, MalformedField> {
        match byte {
            b if is_ws(b) => {
                scanner.extend_value(cursor, cursor + 1);
                Ok(Fold)
            }
            b if is_field_vchar(b) => {
                scanner.extend_value(cursor, cursor + 1);
                Ok(Value(ContentStep::Head))
            }
            b'\r' => {
                scanner.end_line(cursor);
                Ok(ValueLf)
            }
            _ => Err(MalformedField::at(cursor)),
        }
    }
}
