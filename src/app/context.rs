use crate::domain::TemplateRenderer;
use crate::ports::RealEstateBackend;

/// Application context holding the collaborators a submission is prepared with.
pub struct AppContext<B: RealEstateBackend, T: TemplateRenderer> {
    backend: B,
    renderer: T,
}

impl<B: RealEstateBackend, T: TemplateRenderer> AppContext<B, T> {
    /// Create a new application context.
    pub fn new(backend: B, renderer: T) -> Self {
        Self { backend, renderer }
    }

    /// Get a reference to the real-estate backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &T {
        &self.renderer
    }
}
