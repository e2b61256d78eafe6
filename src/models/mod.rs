pub mod chat;
pub mod completion;

pub use chat::{ChatMessage, Choice, ProviderRequest, ProviderResponse, Role, Usage};
pub use completion::{CompletionChoice, CompletionRequest, CompletionResponse};
