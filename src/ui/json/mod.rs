//! NDJSON output for `--json`.
//!
//! One event per line on stdout; see `events` for the shapes.

pub mod events;

use std::io::{self, Write};

use serde::Serialize;

/// Write one event to stdout and flush, so CI sees progress as it happens.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_typed_event(&mut out, event)?;
    out.flush()
}

/// Serialize `event` as a single line into `out`.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event).map_err(io::Error::from)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::events::{CompleteEvent, StartEvent};
    use super::*;

    #[test]
    fn one_json_object_per_line() {
        let mut buffer = Vec::new();

        write_typed_event(&mut buffer, &StartEvent::new("deploy").with_host("app1")).unwrap();
        write_typed_event(&mut buffer, &CompleteEvent::success("deploy")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let events: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["host"], "app1");
        assert_eq!(events[1]["success"], true);
    }
}
