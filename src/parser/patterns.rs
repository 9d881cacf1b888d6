use once_cell::sync::Lazy;
use regex::Regex;

// Terminator is `;` or any single character. Deliberately not narrowed: a bare
// `id BAR` matches with entry `BA` and terminator `R`.
static ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)id(\s+)([A-Z]+)(\s*)(;|.)").expect("Invalid id pattern")
});

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*\w+\s+)(.*?)(\s*=.*)$").expect("Invalid name pattern")
});

/// Captured pieces of an `id <ENTRY>;` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdMatch {
    pub lead: String,
    pub gap: String,
    pub entry: String,
    pub pad: String,
    pub term: String,
    /// Anything after the terminator, copied through untouched.
    pub rest: String,
}

impl IdMatch {
    /// Rename the keyword to `base` and put `name` in place of the entry.
    pub fn rewrite(&self, name: &str) -> String {
        format!(
            "{}base{}{}{}{}{}",
            self.lead, self.gap, name, self.pad, self.term, self.rest
        )
    }
}

/// Captured pieces of a `<keyword> <name> = ...` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// Leading whitespace, keyword and separating whitespace.
    pub head: String,
    pub value: String,
    /// Optional whitespace, `=` and the rest of the line.
    pub tail: String,
}

impl NameMatch {
    pub fn rewrite(&self, entry: &str) -> String {
        format!("{}{}{}", self.head, entry, self.tail)
    }
}

/// Match a line's content (without terminator) against the id pattern.
pub fn match_id(text: &str) -> Option<IdMatch> {
    let caps = ID_PATTERN.captures(text)?;
    let whole = caps.get(0)?;
    Some(IdMatch {
        lead: caps[1].to_string(),
        gap: caps[2].to_string(),
        entry: caps[3].to_string(),
        pad: caps[4].to_string(),
        term: caps[5].to_string(),
        rest: text[whole.end()..].to_string(),
    })
}

/// Match a line's content (without terminator) against the name pattern.
pub fn match_name(text: &str) -> Option<NameMatch> {
    let caps = NAME_PATTERN.captures(text)?;
    Some(NameMatch {
        head: caps[1].to_string(),
        value: caps[2].to_string(),
        tail: caps[3].to_string(),
    })
}
