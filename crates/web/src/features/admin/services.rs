use std::sync::Arc;

use subtle::ConstantTimeEq;

/// The single shared admin password.
#[derive(Clone)]
pub struct AdminSecret {
    password: Arc<str>,
}

impl AdminSecret {
    pub fn new(password: &str) -> Self {
        Self {
            password: Arc::from(password),
        }
    }

    pub fn verify(&self, candidate: &str) -> bool {
        !candidate.is_empty() && bool::from(self.password.as_bytes().ct_eq(candidate.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify() {
        let secret = AdminSecret::new("admin123");
        assert!(secret.verify("admin123"));
        assert!(!secret.verify("admin1234"));
        assert!(!secret.verify("ADMIN123"));
        assert!(!secret.verify(""));
    }
}
