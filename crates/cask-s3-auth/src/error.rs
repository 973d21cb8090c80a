//! Error types for SigV4 authentication.
//!
//! All failures are deterministic functions of the request and never worth
//! retrying. A signature that is well-formed but cryptographically wrong is
//! *not* an error: [`SignatureV4::verify`](crate::SignatureV4::verify)
//! reports it as `Ok(false)`, keeping a clear line between malformed input
//! and a valid-but-mismatched signature.

/// Errors that can occur while parsing or validating a SigV4-signed request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The signature carrier is malformed: a missing or non-string field, an
    /// unsupported signing scheme, an invalid expiration or policy document,
    /// or a credential scope with the wrong number of parts.
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// The carrier-level expiration (`X-Amz-Expires` or the POST policy
    /// `expiration`) lies before the current wall-clock time.
    #[error("The provided token has expired")]
    ExpiredSignature,

    /// The presented credential scope does not match the server credentials,
    /// or the request carries no signing date.
    #[error("Access denied: {0}")]
    AccessDenied(String),
}
