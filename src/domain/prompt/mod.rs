pub mod bindings;
pub mod template;

pub use bindings::PlaceholderBindings;
pub use template::{TemplateError, TemplateRenderer};
