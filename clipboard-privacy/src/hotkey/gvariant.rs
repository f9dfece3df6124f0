// clipboard-privacy/src/hotkey/gvariant.rs
//! Minimal parser for the GVariant text values `gsettings get` prints.
//!
//! Only the two shapes the GNOME keybinding settings use are supported: a
//! string (`'name'`) and an array of strings (`['/a/', '/b/']`, or `@as []`
//! when empty). Output is parsed as data; it is never evaluated.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GVariantParseError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character '{0}' at offset {1}")]
    Unexpected(char, usize),
    #[error("trailing input at offset {0}")]
    Trailing(usize),
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.chars.peek(), Some((_, c)) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn expect(&mut self, wanted: char) -> Result<(), GVariantParseError> {
        match self.chars.next() {
            Some((_, c)) if c == wanted => Ok(()),
            Some((i, c)) => Err(GVariantParseError::Unexpected(c, i)),
            None => Err(GVariantParseError::UnexpectedEnd),
        }
    }

    /// Skips an optional `@as` type annotation.
    fn skip_annotation(&mut self) {
        if matches!(self.chars.peek(), Some((_, '@'))) {
            self.chars.next();
            while matches!(self.chars.peek(), Some((_, c)) if !c.is_whitespace()) {
                self.chars.next();
            }
            self.skip_ws();
        }
    }

    fn string(&mut self) -> Result<String, GVariantParseError> {
        let quote = match self.chars.next() {
            Some((_, q @ ('\'' | '"'))) => q,
            Some((i, c)) => return Err(GVariantParseError::Unexpected(c, i)),
            None => return Err(GVariantParseError::UnexpectedEnd),
        };

        let mut out = String::new();
        loop {
            match self.chars.next() {
                Some((_, '\\')) => match self.chars.next() {
                    Some((_, 'n')) => out.push('\n'),
                    Some((_, 't')) => out.push('\t'),
                    Some((_, 'r')) => out.push('\r'),
                    Some((_, c)) => out.push(c),
                    None => return Err(GVariantParseError::UnexpectedEnd),
                },
                Some((_, c)) if c == quote => return Ok(out),
                Some((_, c)) => out.push(c),
                None => return Err(GVariantParseError::UnexpectedEnd),
            }
        }
    }

    fn string_array(&mut self) -> Result<Vec<String>, GVariantParseError> {
        self.expect('[')?;
        let mut items = Vec::new();
        self.skip_ws();
        if matches!(self.chars.peek(), Some((_, ']'))) {
            self.chars.next();
            return Ok(items);
        }
        loop {
            self.skip_ws();
            items.push(self.string()?);
            self.skip_ws();
            match self.chars.next() {
                Some((_, ',')) => continue,
                Some((_, ']')) => return Ok(items),
                Some((i, c)) => return Err(GVariantParseError::Unexpected(c, i)),
                None => return Err(GVariantParseError::UnexpectedEnd),
            }
        }
    }

    fn finish(&mut self) -> Result<(), GVariantParseError> {
        self.skip_ws();
        match self.chars.peek() {
            Some((i, _)) => Err(GVariantParseError::Trailing(*i)),
            None => Ok(()),
        }
    }
}

/// Parses a GVariant string such as `'clipboard-privacy'`.
pub fn parse_string(input: &str) -> Result<String, GVariantParseError> {
    let mut parser = Parser::new(input);
    parser.skip_ws();
    let value = parser.string()?;
    parser.finish()?;
    Ok(value)
}

/// Parses a GVariant string array such as `['/a/', '/b/']` or `@as []`.
pub fn parse_string_array(input: &str) -> Result<Vec<String>, GVariantParseError> {
    let mut parser = Parser::new(input);
    parser.skip_ws();
    parser.skip_annotation();
    let items = parser.string_array()?;
    parser.finish()?;
    Ok(items)
}

/// Formats a single string in GVariant text syntax.
pub fn format_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Formats a string array in GVariant text syntax.
pub fn format_string_array(items: &[String]) -> String {
    if items.is_empty() {
        return "@as []".to_string();
    }
    let inner: Vec<String> = items.iter().map(|s| format_string(s)).collect();
    format!("[{}]", inner.join(", "))
}
