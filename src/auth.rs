use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const TOKEN_TYPE_KEY: &str = "token_type";

/// Key-value storage holding the bearer credential.
///
/// Only presence is checked here; the classification service decides whether
/// the token is any good.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);

    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn store_token(&self, access_token: String, token_type: String) {
        self.set(ACCESS_TOKEN_KEY, access_token);
        self.set(TOKEN_TYPE_KEY, token_type);
    }

    fn logout(&self) {
        self.remove(ACCESS_TOKEN_KEY);
        self.remove(TOKEN_TYPE_KEY);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCredentials {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl CredentialStore for MemoryCredentials {
    fn get(&self, key: &str) -> Option<String> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
    }
}
