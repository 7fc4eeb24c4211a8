use crate::{FederatedProfile, Provider};

use std::fmt;

/// A single login request, local or federated
#[derive(Clone)]
pub enum LoginAttempt {
    Local {
        email: String,
        password: String,
    },
    Federated {
        provider: Provider,
        profile: FederatedProfile,
    },
}

impl LoginAttempt {
    pub fn local(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Local {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn federated(provider: Provider, profile: FederatedProfile) -> Self {
        Self::Federated { provider, profile }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Self::Local { .. } => "local",
            Self::Federated { provider, .. } => provider.as_str(),
        }
    }
}

impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { email, .. } => f
                .debug_struct("Local")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Self::Federated { provider, profile } => f
                .debug_struct("Federated")
                .field("provider", provider)
                .field("profile", profile)
                .finish(),
        }
    }
}
