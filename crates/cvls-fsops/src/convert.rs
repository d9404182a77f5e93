//! Byte-level line terminator normalisation.
//!
//! Every terminator that contains a carriage return becomes `\r\n`. A bare `\n`
//! is left alone. The transform works on raw bytes, so content is never decoded.

use std::borrow::Cow;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Rewrite bare `\r` terminators to `\r\n`, leaving `\r\n` and bare `\n` untouched.
///
/// Returns the input unchanged (borrowed) when there is nothing to rewrite.
/// Applying the function to its own output yields the same bytes.
#[must_use]
pub fn convert(content: &[u8]) -> Cow<'_, [u8]> {
    let Some(first) = first_lone_cr(content) else {
        return Cow::Borrowed(content);
    };

    let mut out = Vec::with_capacity(content.len() + content.len() / 32 + 1);
    out.extend_from_slice(&content[..first]);
    let mut bytes = content[first..].iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        if byte == CR {
            // An existing `\r\n` collapses onto the same output as a bare `\r`.
            if bytes.peek() == Some(&LF) {
                bytes.next();
            }
            out.extend_from_slice(b"\r\n");
        } else {
            out.push(byte);
        }
    }
    Cow::Owned(out)
}

/// True when `content` holds at least one `\r` not immediately followed by `\n`.
#[must_use]
pub fn needs_conversion(content: &[u8]) -> bool {
    first_lone_cr(content).is_some()
}

fn first_lone_cr(content: &[u8]) -> Option<usize> {
    content
        .iter()
        .enumerate()
        .position(|(idx, &byte)| byte == CR && content.get(idx + 1) != Some(&LF))
}

/// Counts of each terminator variant found in a buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineEndingStats {
    /// Paired `\r\n` terminators.
    pub crlf: usize,
    /// Bare `\r` terminators.
    pub cr: usize,
    /// Bare `\n` terminators.
    pub lf: usize,
}

impl LineEndingStats {
    /// Total number of terminators of any kind.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.crlf + self.cr + self.lf
    }
}

/// Classify every terminator in `content` in a single pass.
#[must_use]
pub fn scan(content: &[u8]) -> LineEndingStats {
    let mut stats = LineEndingStats::default();
    let mut idx = 0;
    while idx < content.len() {
        match content[idx] {
            CR if content.get(idx + 1) == Some(&LF) => {
                stats.crlf += 1;
                idx += 1;
            }
            CR => stats.cr += 1,
            LF => stats.lf += 1,
            _ => {}
        }
        idx += 1;
    }
    stats
}
