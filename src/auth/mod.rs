//! Wallet-signature authentication.
//!
//! Login is a signed-message check: the client signs a message with its
//! wallet's ed25519 key, the server verifies the detached signature against
//! the base58 wallet address, and a successful check is exchanged for a
//! bearer token. Protected routes verify that token on every request; there
//! is no refresh and no revocation list - tokens are valid until expiry or
//! secret rotation.

/// Bearer-token middleware for protected routes
pub mod middleware;
/// Detached ed25519 signature verification
pub mod signature;
/// JWT issue and verify against the shared secret
pub mod token;
