//! Table-driven run of the literal header lines the parser was first checked against.

use micro_http_field::{FieldParser, TracingObserver, parse_field};

#[derive(Debug, Clone, Copy)]
enum Expected {
    Field { name: &'static [u8], value: &'static [u8] },
    Malformed { offset: usize },
}

use Expected::*;

const SEED_CORPUS: &[(&str, &[u8], Expected)] = &[
    ("plain", b"Host: 789\r\n", Field { name: b"Host", value: b"789" }),
    ("fold", b"Host: 789\r\n 0\r\n", Field { name: b"Host", value: b"789\r\n 0" }),
    ("multi_fold", b"Host: 789\r\n 0\r\n\t0\r\n", Field { name: b"Host", value: b"789\r\n 0\r\n\t0" }),
    ("empty_value", b"Host:\r\n", Field { name: b"Host", value: b"" }),
    ("whitespace_only_value", b"Host:    \r\n", Field { name: b"Host", value: b"" }),
    ("inner_whitespace", b"Host:  00 333 45  \r\n", Field { name: b"Host", value: b"00 333 45" }),
    ("wide_rws", b"Host: 123     456\r\n", Field { name: b"Host", value: b"123     456" }),
    ("three_groups", b"Host: 0 1 2\r\n", Malformed { offset: 10 }),
    ("single_char_name", b"X: y\r\n", Field { name: b"X", value: b"y" }),
    ("no_space_after_colon", b"Content-Length:42\r\n", Field { name: b"Content-Length", value: b"42" }),
    ("colon_in_value", b"Host: 127.0.0.1:8080\r\n", Field { name: b"Host", value: b"127.0.0.1:8080" }),
    ("missing_name", b": 789\r\n", Malformed { offset: 0 }),
    ("space_before_colon", b"Host : 789\r\n", Malformed { offset: 4 }),
    ("missing_colon", b"Host 789\r\n", Malformed { offset: 4 }),
    ("missing_crlf", b"Host: 789", Malformed { offset: 9 }),
    ("bare_lf", b"Host: 789\n", Malformed { offset: 9 }),
    ("control_in_value", b"Host: 7\x0089\r\n", Malformed { offset: 7 }),
    ("empty_line", b"", Malformed { offset: 0 }),
];

#[test]
fn seed_corpus() {
    for (case, line, expected) in SEED_CORPUS {
        let outcome = parse_field(line);

        match (*expected, outcome) {
            (Field { name, value }, Ok(field)) => {
                assert_eq!(field.name(), name, "{case}: name");
                assert_eq!(field.value(), value, "{case}: value");
                assert_eq!(field.consumed(), line.len(), "{case}: consumed");
            }
            (Malformed { offset }, Err(e)) => assert_eq!(e.offset(), offset, "{case}: offset"),
            (expected, outcome) => panic!("{case}: expected {expected:?}, got {outcome:?}"),
        }
    }
}

#[test]
fn seed_corpus_with_tracing_observer() {
    let mut traced = FieldParser::with_observer(TracingObserver);

    for (case, line, _) in SEED_CORPUS {
        assert_eq!(traced.parse(line), parse_field(line), "{case}");
    }
}

#[test]
fn seed_corpus_is_deterministic() {
    for (case, line, _) in SEED_CORPUS {
        assert_eq!(parse_field(line), parse_field(line), "{case}");
    }
}
