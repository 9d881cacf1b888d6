use serde::{Deserialize, Serialize};

/// One physical line of the source file, split from its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// `"\n"`, `"\r\n"` or empty for a final unterminated line.
    pub ending: String,
}

impl Line {
    pub fn new(text: impl Into<String>, ending: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ending: ending.into(),
        }
    }

    /// Split one `split_inclusive('\n')` chunk into content and terminator.
    pub fn from_raw(raw: &str) -> Self {
        if let Some(text) = raw.strip_suffix("\r\n") {
            Self::new(text, "\r\n")
        } else if let Some(text) = raw.strip_suffix('\n') {
            Self::new(text, "\n")
        } else {
            Self::new(raw, "")
        }
    }
}

/// Ordered, mutable line buffer. Indices match physical line numbers (0-based).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    pub lines: Vec<Line>,
}

impl LineBuffer {
    pub fn from_text(contents: &str) -> Self {
        Self {
            lines: contents.split_inclusive('\n').map(Line::from_raw).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Reassemble the buffer with every line's original terminator.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push_str(&line.ending);
        }
        out
    }
}

/// A single id/name substitution performed by the rewriter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rebase {
    pub id_line: usize,
    pub name_line: usize,
    pub entry: String,
    pub name: String,
}
