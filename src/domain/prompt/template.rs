use thiserror::Error;

use super::PlaceholderBindings;

/// Errors raised while rendering an operator-supplied template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Template references a placeholder with no bound value.
    #[error("Template references '{{{name}}}' but no value is bound for '{name}'")]
    MissingBinding { name: String },

    /// Unbalanced brace that is neither a placeholder nor an escape.
    #[error("Malformed template: unmatched '{brace}' at byte {offset}")]
    MalformedTemplate { brace: char, offset: usize },
}

/// Trait for rendering templates.
///
/// This abstraction keeps the substitution engine out of the pipeline code so
/// the controller only sees "template + bindings in, prompt out".
pub trait TemplateRenderer {
    /// Render a template string with the given bindings.
    ///
    /// Either every placeholder is substituted or an error is returned; a
    /// partially rendered prompt is never produced.
    fn render(&self, template: &str, bindings: &PlaceholderBindings)
    -> Result<String, TemplateError>;
}
