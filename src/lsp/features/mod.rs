//! LSP features for JaPy
//!
//! - `traits.rs` defines the provider seam between the backend and feature logic
//! - `completion` implements the static dialect completion

pub mod completion;
pub mod traits;

pub use traits::{CompletionContext, CompletionProvider};
