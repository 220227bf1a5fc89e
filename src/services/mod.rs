mod artifact_filesystem;
mod clipboard_arboard;
mod gemini_client_http;
mod placeholder_renderer;
mod prompt_assets;
mod real_estate_backend_http;

pub use artifact_filesystem::save_artifact;
pub use clipboard_arboard::ArboardClipboard;
pub use gemini_client_http::HttpGeminiClient;
pub use placeholder_renderer::PlaceholderRenderer;
pub use prompt_assets::default_template;
pub use real_estate_backend_http::HttpRealEstateBackend;
