//! # Grant module
//! Contains the token endpoint grants

mod refresh_token;

pub use refresh_token::RefreshTokenGrant;
