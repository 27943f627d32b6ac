//! Diagnostic hook of the field automaton.
//!
//! The parser reports its progress to a [`FieldObserver`] passed in by the caller.
//! Observers only watch: nothing they do can change a parse outcome, and the
//! default [`NoopObserver`] compiles down to nothing.
//!
//! [`TracingObserver`] forwards the events to `tracing`. Granular steps are emitted
//! at `TRACE`, final outcomes at `DEBUG`.

use std::ops::Range;

use tracing::{debug, trace};

use crate::protocol::{HeaderField, MalformedField};

/// Which side of the value an OWS run was trimmed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ows {
    Leading,
    Trailing,
}

/// Receives events while a line moves through the automaton.
///
/// Every method has an empty default, implementors pick the events they need.
/// All ranges are byte offsets into the parsed line.
#[allow(unused_variables, reason = "default methods ignore their events")]
pub trait FieldObserver {
    /// The name ended at the `:` found at `name.end`.
    fn name_parsed(&mut self, name: Range<usize>) {}

    /// An OWS run was excluded from the value.
    fn ows_skipped(&mut self, kind: Ows, span: Range<usize>) {}

    /// A value-bearing span was recognized, `value` is the value recorded so far.
    fn value_extended(&mut self, value: Range<usize>) {}

    /// An obs-fold starts with the CR at `at`.
    fn fold_found(&mut self, at: usize) {}

    /// Called exactly once per parse with its outcome.
    fn finished(&mut self, outcome: Result<&HeaderField<'_>, &MalformedField>) {}
}

impl<O: FieldObserver + ?Sized> FieldObserver for &mut O {
    fn name_parsed(&mut self, name: Range<usize>) {
        (**self).name_parsed(name);
    }

    fn ows_skipped(&mut self, kind: Ows, span: Range<usize>) {
        (**self).ows_skipped(kind, span);
    }

    fn value_extended(&mut self, value: Range<usize>) {
        (**self).value_extended(value);
    }

    fn fold_found(&mut self, at: usize) {
        (**self).fold_found(at);
    }

    fn finished(&mut self, outcome: Result<&HeaderField<'_>, &MalformedField>) {
        (**self).finished(outcome);
    }
}

/// Ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FieldObserver for NoopObserver {}

/// Emits every event as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FieldObserver for TracingObserver {
    fn name_parsed(&mut self, name: Range<usize>) {
        trace!(name_start = name.start, name_end = name.end, "parsed field name");
    }

    fn ows_skipped(&mut self, kind: Ows, span: Range<usize>) {
        trace!(?kind, start = span.start, end = span.end, "skipped whitespace");
    }

    fn value_extended(&mut self, value: Range<usize>) {
        trace!(value_start = value.start, value_end = value.end, "extended field value");
    }

    fn fold_found(&mut self, at: usize) {
        trace!(offset = at, "found obs-fold");
    }

    fn finished(&mut self, outcome: Result<&HeaderField<'_>, &MalformedField>) {
        match outcome {
            Ok(field) => debug!(
                name = %String::from_utf8_lossy(field.name()),
                value_len = field.value().len(),
                consumed = field.consumed(),
                folded = field.is_folded(),
                "parsed header field"
            ),
            Err(e) => debug!(offset = e.offset(), "malformed header field"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldParser;

    #[derive(Debug, Default)]
    struct Counter {
        events: usize,
        finished: usize,
    }

    impl FieldObserver for Counter {
        fn value_extended(&mut self, _value: Range<usize>) {
            self.events += 1;
        }

        fn finished(&mut self, _outcome: Result<&HeaderField<'_>, &MalformedField>) {
            self.finished += 1;
        }
    }

    #[test]
    fn borrowed_observer_receives_events() {
        let mut counter = Counter::default();

        {
            let mut parser = FieldParser::with_observer(&mut counter);
            parser.parse(b"Host: a b\r\n").unwrap();
            parser.parse(b"Host a\r\n").unwrap_err();
        }

        // "a" then "a b"
        assert_eq!(counter.events, 2);
        assert_eq!(counter.finished, 2);
    }

    #[test]
    fn tracing_observer_is_transparent() {
        let line = b"Host:  00 333 45  \r\n";
        let traced = FieldParser::with_observer(TracingObserver).parse(line);
        let silent = FieldParser::new().parse(line);
        assert_eq!(traced, silent);
    }
}
