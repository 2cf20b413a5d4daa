//! The completion collaborator seam.

use crate::error::CompletionError;

/// One rendered prompt ready to send to a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Provider model identifier.
    pub model: String,
    /// Fully rendered user prompt.
    pub prompt: String,
}

/// A chat-completion provider.
///
/// Implementations own their transport, credentials, timeouts and retries.
/// Whatever text comes back is handed to the extractor unchanged, including
/// provider messages that are not an analysis at all.
pub trait CompletionClient: Send + Sync {
    /// Sends one prompt and returns the model's text.
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for &C {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        (**self).complete(request)
    }
}

impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        (**self).complete(request)
    }
}

impl<C: CompletionClient + ?Sized> CompletionClient for std::sync::Arc<C> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        (**self).complete(request)
    }
}
