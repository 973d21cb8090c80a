//! Server-held signing credentials.

use std::fmt;

/// The long-term credential record the engine signs and validates against.
///
/// One record is supplied at engine construction and treated as immutable
/// for the life of the process; the engine never looks credentials up
/// elsewhere. The secret key is redacted from `Debug` output so signing
/// material cannot leak through logs.
#[derive(Clone)]
pub struct ServerCredentials {
    /// Access key ID clients must present.
    pub access_key: String,
    /// Secret key the signing key chain is derived from.
    pub secret_key: String,
    /// Region this server signs for.
    pub region: String,
    /// Service name; `s3` for object storage.
    pub service: String,
}

impl ServerCredentials {
    /// Create a credential record for the given scope.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: region.into(),
            service: service.into(),
        }
    }
}

impl fmt::Debug for ServerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .field("service", &self.service)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_redact_secret_key_in_debug_output() {
        let credentials = ServerCredentials::new("AKID", "super-secret", "us-east-1", "s3");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("AKID"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("super-secret"));
    }
}
