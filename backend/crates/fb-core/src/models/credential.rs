use std::fmt;

/// How an account proves its identity on local login
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// bcrypt hash of the local password
    LocalPassword { hash: String },
    /// Account created through a federated provider, no usable local secret
    FederatedOnly,
}

impl Credential {
    pub fn local(hash: impl Into<String>) -> Self {
        Self::LocalPassword { hash: hash.into() }
    }

    pub fn password_hash(&self) -> Option<&str> {
        match self {
            Self::LocalPassword { hash } => Some(hash.as_str()),
            Self::FederatedOnly => None,
        }
    }

    pub fn is_federated_only(&self) -> bool {
        matches!(self, Self::FederatedOnly)
    }
}

// Hashes never end up in logs
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalPassword { .. } => f.write_str("LocalPassword(<redacted>)"),
            Self::FederatedOnly => f.write_str("FederatedOnly"),
        }
    }
}
