pub mod create;
pub mod find_by_id;
pub mod load_all;
pub mod update_status;
pub mod append;
pub mod load_audits;

// Re-exports
pub use create::*;
pub use find_by_id::*;
pub use load_all::*;
pub use update_status::*;
pub use append::*;
pub use load_audits::*;
