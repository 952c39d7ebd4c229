pub mod workspace;

pub use workspace::resolve_workspace;
