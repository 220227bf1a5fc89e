use crate::domain::{PlaceholderBindings, TemplateError, TemplateRenderer};

/// Renderer for `{name}` placeholders.
///
/// `{{` and `}}` produce literal braces. Bound values are inserted verbatim
/// and never re-scanned, so JSON or markup inside a value passes through.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(
        &self,
        template: &str,
        bindings: &PlaceholderBindings,
    ) -> Result<String, TemplateError> {
        let mut rendered = String::with_capacity(template.len());
        let mut rest = template;
        let mut offset = 0;

        while let Some(pos) = rest.find(['{', '}']) {
            rendered.push_str(&rest[..pos]);
            let brace_offset = offset + pos;
            let tail = &rest[pos..];

            let consumed = if tail.starts_with("{{") {
                rendered.push('{');
                2
            } else if tail.starts_with("}}") {
                rendered.push('}');
                2
            } else if tail.starts_with('}') {
                return Err(TemplateError::MalformedTemplate { brace: '}', offset: brace_offset });
            } else {
                let close = tail[1..].find(['{', '}']).filter(|&i| tail.as_bytes()[i + 1] == b'}');
                let Some(close) = close else {
                    return Err(TemplateError::MalformedTemplate {
                        brace: '{',
                        offset: brace_offset,
                    });
                };
                let name = &tail[1..close + 1];
                let value = bindings
                    .get(name)
                    .ok_or_else(|| TemplateError::MissingBinding { name: name.to_string() })?;
                rendered.push_str(value);
                close + 2
            };

            rest = &tail[consumed..];
            offset = brace_offset + consumed;
        }

        rendered.push_str(rest);
        Ok(rendered)
    }
}
