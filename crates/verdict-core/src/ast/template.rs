//! Message and value templates
//!
//! A template is text with `{field}` placeholders. `{{` and `}}` produce
//! literal braces. Construction never fails; malformed templates are
//! reported when parsed, rendered or validated.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(String),
    Field(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template(String);

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Template(source.into())
    }

    pub fn source(&self) -> &str {
        &self.0
    }

    /// Split the template into literal text and field placeholders
    pub fn segments(&self) -> Result<Vec<Segment<'_>>> {
        let source = self.0.as_str();
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            match ch {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    text.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    text.push('}');
                }
                '{' => {
                    let start = idx + 1;
                    let end = source[start..]
                        .find('}')
                        .map(|offset| start + offset)
                        .ok_or_else(|| self.error("unterminated placeholder"))?;
                    let field = source[start..end].trim();
                    if field.is_empty() || field.contains('{') {
                        return Err(self.error("empty or nested placeholder"));
                    }
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Field(field));
                    while let Some((i, _)) = chars.peek() {
                        if *i > end {
                            break;
                        }
                        chars.next();
                    }
                }
                '}' => return Err(self.error("unmatched '}'")),
                _ => text.push(ch),
            }
        }

        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }
        Ok(segments)
    }

    /// Placeholder field names, in order of appearance
    pub fn placeholders(&self) -> Result<Vec<&str>> {
        Ok(self
            .segments()?
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Field(field) => Some(field),
                Segment::Text(_) => None,
            })
            .collect())
    }

    /// Render the template, resolving each placeholder through `lookup`
    pub fn render<F>(&self, mut lookup: F) -> Result<String>
    where
        F: FnMut(&str) -> Result<String>,
    {
        let mut out = String::with_capacity(self.0.len());
        for segment in self.segments()? {
            match segment {
                Segment::Text(text) => out.push_str(&text),
                Segment::Field(field) => out.push_str(&lookup(field)?),
            }
        }
        Ok(out)
    }

    fn error(&self, message: &str) -> CoreError {
        CoreError::InvalidTemplate {
            template: self.0.clone(),
            message: message.to_string(),
        }
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Template(source)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
