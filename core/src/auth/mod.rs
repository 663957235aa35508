//! Demo bearer-token sessions.
//!
//! Any username is accepted with the configured password. Tokens are
//! derived from the username, so logging in again yields the same token.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Domain appended to usernames to form user emails
pub const EMAIL_DOMAIN: &str = "mergington.edu";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub username: String,
}

impl User {
    pub fn from_username(username: &str) -> Self {
        Self {
            email: format!("{}@{}", username, EMAIL_DOMAIN),
            username: username.to_string(),
        }
    }
}

/// Access token handed back on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

impl Token {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    IncorrectCredentials,
    #[error("Invalid authentication credentials")]
    InvalidToken,
}

/// Issued tokens and the users they belong to
#[derive(Debug, Clone)]
pub struct SessionStore {
    password: String,
    users: HashMap<String, User>,
}

impl SessionStore {
    /// Create a store that accepts `password` for every username
    pub fn new(password: &str) -> Self {
        Self {
            password: password.to_string(),
            users: HashMap::new(),
        }
    }

    /// Check the password and issue a token for `username`
    pub fn login(&mut self, username: &str, password: &str) -> Result<Token, AuthError> {
        if password != self.password {
            return Err(AuthError::IncorrectCredentials);
        }

        let access_token = format!("user-{}-token", username);
        self.users
            .insert(access_token.clone(), User::from_username(username));
        Ok(Token::bearer(access_token))
    }

    /// Resolve a bearer token to its user
    pub fn authenticate(&self, token: &str) -> Result<&User, AuthError> {
        self.users.get(token).ok_or(AuthError::InvalidToken)
    }

    /// Number of issued tokens
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
