//! Log redaction for patient measurements.
//!
//! Formatted log lines pass through `RedactingMakeWriter` before they reach
//! the sink. Two shapes are masked:
//! - `<field key>=<number>` pairs, for every key of every form schema
//!   (`Glucose=148`, `chol: 233`)
//! - numeric vectors of three or more elements (`[2.0, 120.0, 70.0]`)
//!
//! This is a fallback. Call sites should not log values in the first place.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use tracing_subscriber::fmt::MakeWriter;

use crate::domain::{fields_for, Disease};

/// Upper bound on bytes scanned per call.
const MAX_REDACT_BYTES: usize = 16 * 1024;

struct Patterns {
    field_pair: Regex,
    vector: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| {
        let keys: BTreeSet<&str> = Disease::ALL
            .iter()
            .flat_map(|d| fields_for(*d).iter().map(|f| f.key))
            .collect();
        let alternation = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");

        let number = r"-?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";
        Patterns {
            field_pair: Regex::new(&format!(r"\b({alternation})(\s*[=:]\s*){number}"))
                .expect("Valid regex"),
            vector: Regex::new(&format!(
                r"\[\s*{number}(?:\s*,\s*{number}){{2,}}\s*\]"
            ))
            .expect("Valid regex"),
        }
    })
}

fn truncate_to_char_boundary(input: &str, max_bytes: usize) -> (&str, bool) {
    if input.len() <= max_bytes {
        return (input, false);
    }
    let mut end = max_bytes;
    while end > 0 && !input.is_char_boundary(end) {
        end -= 1;
    }
    (&input[..end], true)
}

/// Mask measurement values in `input`.
#[must_use]
pub fn redact(input: &str) -> String {
    redact_with_limit(input, MAX_REDACT_BYTES)
}

fn redact_with_limit(input: &str, max_bytes: usize) -> String {
    let p = patterns();
    let (prefix, truncated) = truncate_to_char_boundary(input, max_bytes);

    let mut out = p.vector.replace_all(prefix, "[REDACTED-VECTOR]").into_owned();
    out = p
        .field_pair
        .replace_all(&out, "${1}${2}[REDACTED]")
        .into_owned();

    if truncated {
        out.push_str(" [TRUNCATED]");
    }
    out
}

/// `MakeWriter` that redacts each formatted line before writing it.
#[derive(Debug, Clone)]
pub struct RedactingMakeWriter<M> {
    inner: M,
}

impl<M> RedactingMakeWriter<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

pub struct RedactingWriter<W: std::io::Write> {
    inner: W,
    buffer: Vec<u8>,
}

impl<W: std::io::Write> RedactingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
        }
    }

    fn flush_lines(&mut self) -> std::io::Result<()> {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let redacted = redact(&String::from_utf8_lossy(&line));
            self.inner.write_all(redacted.as_bytes())?;
        }
        Ok(())
    }
}

impl<W: std::io::Write> std::io::Write for RedactingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        // A huge line without a newline is written out (capped) instead of buffered forever.
        if self.buffer.len() > MAX_REDACT_BYTES * 2 {
            let redacted = redact(&String::from_utf8_lossy(&self.buffer));
            self.inner.write_all(redacted.as_bytes())?;
            self.inner.write_all(b"\n")?;
            self.buffer.clear();
            return Ok(buf.len());
        }

        self.flush_lines()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_lines()?;
        if !self.buffer.is_empty() {
            let redacted = redact(&String::from_utf8_lossy(&self.buffer));
            self.inner.write_all(redacted.as_bytes())?;
            self.buffer.clear();
        }
        self.inner.flush()
    }
}

impl<W: std::io::Write> Drop for RedactingWriter<W> {
    fn drop(&mut self) {
        let _ = std::io::Write::flush(self);
    }
}

impl<'a, M> MakeWriter<'a> for RedactingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = RedactingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        RedactingWriter::new(self.inner.make_writer())
    }
}
