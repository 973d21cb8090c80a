//! Normalized view of a signable HTTP request.
//!
//! The engine never touches a transport; callers hand it this flattened
//! representation of whatever request they received (or are about to send).
//! Query parameters are stored decoded, in wire order, with repeated keys
//! preserved — canonicalization re-encodes and re-orders them later.

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method};

/// The request body as far as signing is concerned.
///
/// Streaming bodies cannot be hashed up front, so they canonicalize as
/// `UNSIGNED-PAYLOAD`; callers that want the body covered by the signature
/// must buffer it first.
#[derive(Debug, Clone, Default)]
pub enum Body {
    /// No body at all.
    #[default]
    None,
    /// A fully buffered body whose bytes can be hashed.
    Buffered(Bytes),
    /// A body that will be consumed as a stream and cannot be hashed here.
    Streaming,
}

/// A request in the shape the canonicalizer consumes.
#[derive(Debug, Clone)]
pub struct SignatureRequest {
    /// HTTP method.
    pub method: Method,
    /// URI path as presented on the wire, without the query string.
    pub path: String,
    /// Route prefix the server is mounted under; prepended to `path` when
    /// building the canonical URI. Empty when the server owns the whole
    /// path space.
    pub prefix: String,
    /// Decoded query parameters in wire order.
    pub query: Vec<(String, String)>,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Body,
}

impl SignatureRequest {
    /// Build a signature request from `http::request::Parts` plus whatever
    /// body knowledge the caller has.
    ///
    /// A missing `Host` header is backfilled from the URI authority so that
    /// outbound requests built from absolute URIs canonicalize the same way
    /// inbound ones do.
    #[must_use]
    pub fn from_parts(parts: &http::request::Parts, body: Body) -> Self {
        let query = parts
            .uri
            .query()
            .map(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();

        let mut headers = parts.headers.clone();
        if !headers.contains_key(http::header::HOST) {
            if let Some(authority) = parts.uri.authority() {
                if let Ok(value) = HeaderValue::from_str(authority.as_str()) {
                    headers.insert(http::header::HOST, value);
                }
            }
        }

        Self {
            method: parts.method.clone(),
            path: parts.uri.path().to_owned(),
            prefix: String::new(),
            query,
            headers,
            body,
        }
    }

    /// Header value by name. Multi-valued headers are joined with `,`, the
    /// form they take in a canonical request.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<String> {
        let values: Vec<&str> = self
            .headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.join(","))
        }
    }

    /// First query value with the given key, if present.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_query_pairs_from_uri() {
        let (parts, ()) = http::Request::builder()
            .method("GET")
            .uri("http://localhost:9000/bucket/key?b=2&a=1&a=3")
            .body(())
            .unwrap()
            .into_parts();

        let req = SignatureRequest::from_parts(&parts, Body::None);
        assert_eq!(req.path, "/bucket/key");
        assert_eq!(
            req.query,
            vec![
                ("b".to_owned(), "2".to_owned()),
                ("a".to_owned(), "1".to_owned()),
                ("a".to_owned(), "3".to_owned()),
            ]
        );
        assert_eq!(req.query_param("a"), Some("1"));
        assert_eq!(req.query_param("missing"), None);
    }

    #[test]
    fn test_should_backfill_host_from_authority() {
        let (parts, ()) = http::Request::builder()
            .method("GET")
            .uri("http://bucket.example.com:9000/key")
            .body(())
            .unwrap()
            .into_parts();

        let req = SignatureRequest::from_parts(&parts, Body::None);
        assert_eq!(req.header("host").as_deref(), Some("bucket.example.com:9000"));
    }

    #[test]
    fn test_should_join_multi_valued_headers_with_comma() {
        let (parts, ()) = http::Request::builder()
            .method("GET")
            .uri("http://example.com/")
            .header("x-amz-meta-tag", "one")
            .header("x-amz-meta-tag", "two")
            .body(())
            .unwrap()
            .into_parts();

        let req = SignatureRequest::from_parts(&parts, Body::None);
        assert_eq!(req.header("x-amz-meta-tag").as_deref(), Some("one,two"));
    }
}
