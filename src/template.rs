//! Bubble markup templates.
//!
//! Templates use the underscore.js interpolation tags the page markup is
//! written in: `<%= field %>` inserts the value verbatim and `<%- field %>`
//! inserts it HTML-escaped. Only the `title` and `body` fields exist.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use crate::input::BubbleContent;

/// Markup used when the page does not provide a template.
pub const DEFAULT_TEMPLATE: &str = concat!(
    r#"<div class="bubble">"#,
    r#"<div class="bubble-controls">"#,
    r##"<a class="freeze-bubble" href="#">freeze</a>"##,
    r##"<a class="close-bubble" href="#" style="display: none;">close</a>"##,
    r#"</div>"#,
    r#"<div class="title"><%= title %></div>"#,
    r#"<div class="body"><%= body %></div>"#,
    r#"</div>"#,
);

/// Error returned by [`Template::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// A `<%` tag has no closing `%>`.
    #[error("unterminated template tag at byte {offset}")]
    Unterminated { offset: usize },
    /// A tag names something other than `title` or `body`.
    #[error("unknown template field: {0}")]
    UnknownField(String),
    /// A tag is not an interpolation (`<%=` or `<%-`).
    #[error("unsupported template tag at byte {offset}")]
    UnsupportedTag { offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Raw(Field),
    Escaped(Field),
}

/// A parsed bubble template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for unterminated tags, non-interpolating
    /// tags, or unknown field names.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut consumed = 0;

        while let Some(start) = rest.find("<%") {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let offset = consumed + start;
            let tag = &rest[start + 2..];
            let Some(end) = tag.find("%>") else {
                return Err(TemplateError::Unterminated { offset });
            };
            let (escaped, name) = match tag[..end].chars().next() {
                Some('=') => (false, &tag[1..end]),
                Some('-') => (true, &tag[1..end]),
                _ => return Err(TemplateError::UnsupportedTag { offset }),
            };
            let field = match name.trim() {
                "title" => Field::Title,
                "body" => Field::Body,
                other => return Err(TemplateError::UnknownField(other.to_string())),
            };
            segments.push(if escaped { Segment::Escaped(field) } else { Segment::Raw(field) });

            let advance = start + 2 + end + 2;
            consumed += advance;
            rest = &rest[advance..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Render the template for one bubble.
    #[must_use]
    pub fn render(&self, content: &BubbleContent) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Raw(field) => out.push_str(value(content, *field)),
                Segment::Escaped(field) => escape_into(&mut out, value(content, *field)),
            }
        }
        out
    }
}

fn value(content: &BubbleContent, field: Field) -> &str {
    match field {
        Field::Title => &content.title,
        Field::Body => &content.body,
    }
}

fn escape_into(out: &mut String, raw: &str) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '`' => out.push_str("&#x60;"),
            _ => out.push(ch),
        }
    }
}
