/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Bearer-token identity for HTTP auth.
//!
//! This core only needs "attach an identity to the outgoing request"; token
//! refresh and exchange belong to the [`ProvideToken`] implementation.

use std::error::Error;
use std::fmt::Debug;
use std::sync::Arc;
use zeroize::Zeroizing;

type BoxError = Box<dyn Error + Send + Sync>;

/// An opaque bearer token attached to outgoing requests.
#[derive(Clone, Eq, PartialEq)]
pub struct Token(Arc<TokenInner>);

#[derive(Eq, PartialEq)]
struct TokenInner {
    token: Zeroizing<String>,
}

impl Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token", &"** redacted **")
            .finish()
    }
}

impl Token {
    /// Constructs a new bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Arc::new(TokenInner {
            token: Zeroizing::new(token.into()),
        }))
    }

    /// Returns the underlying token string.
    pub fn token(&self) -> &str {
        &self.0.token
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Self::new(token.to_owned())
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

/// Supplies the bearer token for each call.
pub trait ProvideToken: Send + Sync + Debug {
    /// Returns the token to attach to the next request.
    ///
    /// A failure here means the request cannot be constructed and completes
    /// the call with a construction error.
    fn provide_token(&self) -> Result<Token, BoxError>;
}

/// A token provider that always returns the same token.
#[derive(Clone, Debug)]
pub struct StaticTokenProvider {
    token: Token,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<Token>) -> Self {
        StaticTokenProvider {
            token: token.into(),
        }
    }
}

impl ProvideToken for StaticTokenProvider {
    fn provide_token(&self) -> Result<Token, BoxError> {
        Ok(self.token.clone())
    }
}

impl From<Token> for StaticTokenProvider {
    fn from(token: Token) -> Self {
        StaticTokenProvider { token }
    }
}
