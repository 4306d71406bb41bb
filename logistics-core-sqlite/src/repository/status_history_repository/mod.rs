pub mod repo_impl;
pub mod append;
pub mod load_audits;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::StatusHistoryRepositoryImpl;
