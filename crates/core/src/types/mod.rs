pub mod invocation;
pub mod workspace;

// Re-export commonly used types
pub use invocation::{InvocationMode, InvocationRequest};
pub use workspace::WorkspaceFolder;
