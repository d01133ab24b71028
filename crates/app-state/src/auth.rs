//! Simulated authentication
//!
//! The login and register screens accept any input. Nothing is validated
//! and every request succeeds; the screens add a fixed delay before entering
//! the app.

use serde::{Deserialize, Serialize};

/// Third-party sign-in options on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Sign in with Apple
    Apple,
    /// Sign in with an email link
    Email,
}

impl AuthProvider {
    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            AuthProvider::Apple => "Continue with Apple",
            AuthProvider::Email => "Continue with Email",
        }
    }
}

/// What the user submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    /// Email and password sign-in
    Login {
        /// Email field
        email: String,
        /// Password field
        password: String,
    },
    /// Third-party sign-in
    Provider(AuthProvider),
    /// Account creation
    Register {
        /// Full name field
        name: String,
        /// Email field
        email: String,
        /// Password field
        password: String,
        /// Password confirmation field
        confirm_password: String,
    },
}

/// Result of a simulated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Signed in
    SignedIn,
    /// Account created and signed in
    Registered,
}

/// Authenticator that accepts everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedAuth;

impl SimulatedAuth {
    /// Create the authenticator
    pub fn new() -> Self {
        Self
    }

    /// Accept a request
    pub fn authenticate(&self, request: &AuthRequest) -> AuthOutcome {
        match request {
            AuthRequest::Login { email, .. } => {
                tracing::info!(email = %email, "simulated sign-in accepted");
                AuthOutcome::SignedIn
            }
            AuthRequest::Provider(provider) => {
                tracing::info!(?provider, "simulated provider sign-in accepted");
                AuthOutcome::SignedIn
            }
            AuthRequest::Register { email, .. } => {
                tracing::info!(email = %email, "simulated registration accepted");
                AuthOutcome::Registered
            }
        }
    }
}
