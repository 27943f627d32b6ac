//! Feeds literal header lines through the parser and compares the outcomes.
//!
//! Verbosity follows `FIELD_LOG` (`trace`, `debug`, `info`, ...), `info` by default:
//!
//! ```text
//! FIELD_LOG=trace cargo run -p micro-http-field --example check_fields
//! ```

use std::process::ExitCode;

use micro_http_field::{FieldParser, TracingObserver};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

const CASES: &[(&[u8], Result<(&[u8], &[u8]), usize>)] = &[
    (b"Host: 789\r\n 0\r\n", Ok((b"Host", b"789\r\n 0"))),
    (b"Host: 789\r\n 0\r\n\t0\r\n", Ok((b"Host", b"789\r\n 0\r\n\t0"))),
    (b"Host:\r\n", Ok((b"Host", b""))),
    (b"Host:  00 333 45  \r\n", Ok((b"Host", b"00 333 45"))),
    (b"Host: 123     456\r\n", Ok((b"Host", b"123     456"))),
    (b"Host: 0 1 2\r\n", Err(10)),
];

fn main() -> ExitCode {
    let level = std::env::var("FIELD_LOG").ok().and_then(|level| level.parse().ok()).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {e}");
        return ExitCode::FAILURE;
    }

    let mut parser = FieldParser::with_observer(TracingObserver);
    let mut failures = 0;

    for (line, expected) in CASES {
        let outcome = parser.parse(line).map(|field| (field.name(), field.value())).map_err(|e| e.offset());
        let input = String::from_utf8_lossy(line);

        if outcome == *expected {
            info!(line = ?input, ?outcome, "ok");
        } else {
            error!(line = ?input, ?outcome, ?expected, "unexpected outcome");
            failures += 1;
        }
    }

    info!(cases = CASES.len(), failures, "finished");
    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
