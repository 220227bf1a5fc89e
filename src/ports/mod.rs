mod call_failure;
mod clipboard_writer;
mod generation_client;
mod real_estate_backend;

pub use call_failure::CallFailure;
pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use generation_client::GenerationClient;
pub use real_estate_backend::RealEstateBackend;
