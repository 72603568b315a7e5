//! Log sanitization for health data.
//!
//! Formatted log lines pass through [`SanitizingMakeWriter`], which redacts:
//! - Vital-sign key/value pairs (`age=57`, `bp: 150`, `bmi=31.2`, ...)
//! - Risk percentages attached to a key (`risk=26.28`)
//! - Email addresses and phone numbers
//!
//! This is a fallback. Call sites should not log measurements in the first
//! place; the scorer and UI only log counts and categories.

use std::sync::OnceLock;

use regex::{Regex, RegexSet};
use tracing_subscriber::fmt::MakeWriter;

/// Lines longer than this are cut before scanning.
const MAX_LINE_BYTES: usize = 8 * 1024;

struct Rule {
    regex: Regex,
    replacement: &'static str,
}

struct Rules {
    any: RegexSet,
    rules: Vec<Rule>,
}

static RULES: OnceLock<Rules> = OnceLock::new();

fn rules() -> &'static Rules {
    RULES.get_or_init(|| {
        let table: [(&str, &str); 4] = [
            (
                r"(?i)\b(age|sex|bp|systolic|blood[_ ]?pressure(?:[_ ]?mm[_ ]?hg)?|cholesterol(?:[_ ]?mmol[_ ]?l)?|bmi|weight)(\s*[:=]\s*)[0-9]+(?:\.[0-9]+)?",
                "${1}${2}[REDACTED]",
            ),
            (
                r"(?i)\b(risk|percentage|probability)(\s*[:=]\s*)[0-9]+(?:\.[0-9]+)?%?",
                "${1}${2}[REDACTED]",
            ),
            (
                r"(?i)\b[a-z0-9._%+-]{1,64}@(?:[a-z0-9-]{1,63}\.)+[a-z]{2,}\b",
                "[REDACTED-EMAIL]",
            ),
            (
                r"(?:\+[0-9]{1,3}(?:[-. ]?[0-9]{1,4}){2,5}|\(?\b[0-9]{3}\)?[-. ][0-9]{3}[-. ][0-9]{4})\b",
                "[REDACTED-PHONE]",
            ),
        ];

        // Patterns are literals; failure here is a programming error caught by tests.
        let any = RegexSet::new(table.iter().map(|(p, _)| *p)).expect("valid redaction set");
        let rules = table
            .iter()
            .map(|(pattern, replacement)| Rule {
                regex: Regex::new(pattern).expect("valid redaction pattern"),
                replacement,
            })
            .collect();
        Rules { any, rules }
    })
}

fn clip(input: &str, max_bytes: usize) -> (&str, bool) {
    if input.len() <= max_bytes {
        return (input, false);
    }
    let mut end = max_bytes;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    (&input[..end], true)
}

/// Redact health measurements and contact details from `input`.
#[must_use]
pub fn sanitize(input: &str) -> String {
    let (text, clipped) = clip(input, MAX_LINE_BYTES);
    let rules = rules();

    let mut out = text.to_string();
    for idx in rules.any.matches(text).iter() {
        let rule = &rules.rules[idx];
        out = rule.regex.replace_all(&out, rule.replacement).into_owned();
    }
    if clipped {
        out.push_str(" [TRUNCATED]");
    }
    out
}

/// Whether `input` contains anything [`sanitize`] would redact.
#[must_use]
pub fn contains_sensitive(input: &str) -> bool {
    rules().any.is_match(clip(input, MAX_LINE_BYTES).0)
}

/// A `tracing_subscriber` writer factory that sanitizes each formatted line
/// before handing it to the inner writer.
#[derive(Debug, Clone)]
pub struct SanitizingMakeWriter<M> {
    inner: M,
}

impl<M> SanitizingMakeWriter<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

/// Line-buffering writer produced by [`SanitizingMakeWriter`].
pub struct SanitizingWriter<W: std::io::Write> {
    inner: W,
    pending: Vec<u8>,
}

impl<W: std::io::Write> SanitizingWriter<W> {
    fn emit(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        let line = String::from_utf8_lossy(bytes);
        if bytes.len() <= MAX_LINE_BYTES && !contains_sensitive(&line) {
            return self.inner.write_all(bytes);
        }
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line.as_ref(), ""),
        };
        self.inner.write_all(sanitize(body).as_bytes())?;
        self.inner.write_all(newline.as_bytes())
    }

    fn drain_lines(&mut self) -> std::io::Result<()> {
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            self.emit(&line)?;
        }
        Ok(())
    }
}

impl<W: std::io::Write> std::io::Write for SanitizingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.pending.extend_from_slice(buf);
        self.drain_lines()?;

        if self.pending.len() > MAX_LINE_BYTES {
            let overflow = std::mem::take(&mut self.pending);
            self.emit(&overflow)?;
            self.inner.write_all(b"\n")?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.drain_lines()?;
        if !self.pending.is_empty() {
            let rest = std::mem::take(&mut self.pending);
            self.emit(&rest)?;
        }
        self.inner.flush()
    }
}

impl<W: std::io::Write> Drop for SanitizingWriter<W> {
    fn drop(&mut self) {
        let _ = std::io::Write::flush(self);
    }
}

impl<'a, M> MakeWriter<'a> for SanitizingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SanitizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SanitizingWriter {
            inner: self.inner.make_writer(),
            pending: Vec::new(),
        }
    }
}
