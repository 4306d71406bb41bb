pub mod auditable;
pub mod identifiable;
pub mod package;
pub mod status_history;

// Re-exports
pub use auditable::*;
pub use identifiable::*;
pub use package::*;
pub use status_history::*;
