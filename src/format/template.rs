use thiserror::Error;

/// The five positional address fields a template can reference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub street: String,
    pub number: String,
    pub zip: String,
    pub city: String,
    pub state: String,
}

impl Fields {
    fn get(&self, name: &str) -> Option<&str> {
        match name {
            "street" => Some(&self.street),
            "number" => Some(&self.number),
            "zip" => Some(&self.zip),
            "city" => Some(&self.city),
            "state" => Some(&self.state),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),
    #[error("unclosed placeholder at byte {0}")]
    Unclosed(usize),
    #[error("unmatched '}}' at byte {0}")]
    Unmatched(usize),
}

/// Substitute `fields` into `template`.
///
/// Placeholders are `{street}`, `{number}`, `{zip}`, `{city}` and `{state}`.
/// `{name|text}` renders `text` when the field is empty, mirroring the
/// `[zip|,]` notation of the Gisgraphy address parser. Anything outside
/// braces is copied as-is.
pub fn render(template: &str, fields: &Fields) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    let mut offset = 0;

    while let Some(idx) = rest.find(['{', '}']) {
        if rest.as_bytes()[idx] == b'}' {
            return Err(TemplateError::Unmatched(offset + idx));
        }
        out.push_str(&rest[..idx]);

        let after = &rest[idx + 1..];
        let close = after
            .find('}')
            .ok_or(TemplateError::Unclosed(offset + idx))?;
        let placeholder = &after[..close];

        let (name, fallback) = match placeholder.split_once('|') {
            Some((name, fallback)) => (name, Some(fallback)),
            None => (placeholder, None),
        };
        let value = fields
            .get(name)
            .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;

        match fallback {
            Some(text) if value.is_empty() => out.push_str(text),
            _ => out.push_str(value),
        }

        let consumed = idx + 1 + close + 1;
        rest = &rest[consumed..];
        offset += consumed;
    }
    out.push_str(rest);

    Ok(out)
}
