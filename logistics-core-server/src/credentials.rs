use std::collections::HashMap;

use crate::config::UserCredential;

/// Credential check backing the login endpoint.
///
/// Login only hands out an opaque token; no other endpoint requires it.
pub trait CredentialLookup: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Fixed set of accounts taken from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new(users: &[UserCredential]) -> Self {
        Self {
            users: users
                .iter()
                .map(|user| (user.email.clone(), user.password.clone()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl CredentialLookup for StaticCredentials {
    fn verify(&self, email: &str, password: &str) -> bool {
        self.users
            .get(email)
            .is_some_and(|stored| stored == password)
    }
}
