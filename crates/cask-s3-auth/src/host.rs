//! Host resolution for requests that arrive through proxies.
//!
//! Clients sign against the host they dialed, which is not the host a
//! server behind a load balancer sees. Resolution order: the standard
//! `Forwarded` header (when trusted), a deployment-specific forwarded-host
//! header, `X-Forwarded-Host` combined with `X-Forwarded-Port`, and finally
//! the plain `Host` header.

use crate::request::SignatureRequest;

/// Resolve the host value the client signed against.
pub(crate) fn resolve(
    req: &SignatureRequest,
    allow_forwarded: bool,
    custom_forwarded_host: Option<&str>,
) -> Option<String> {
    if allow_forwarded {
        if let Some(host) = req.header("forwarded").as_deref().and_then(forwarded_host) {
            return Some(host.to_lowercase());
        }
    }

    if let Some(name) = custom_forwarded_host {
        if let Some(host) = req.header(&name.to_lowercase()) {
            return Some(host.to_lowercase());
        }
    }

    if let Some(host) = req.header("x-forwarded-host") {
        let host = host.to_lowercase();
        if let Some(port) = req.header("x-forwarded-port") {
            if port != "443" && port != "80" {
                return Some(if host.contains(':') {
                    replace_port(&host, &port)
                } else {
                    format!("{host}:{port}")
                });
            }
        }
        return Some(host);
    }

    req.header("host")
}

/// Extract the `host=` token from a `Forwarded` header value. The token may
/// be bare or double-quoted and ends at the next `;` or quote.
fn forwarded_host(forwarded: &str) -> Option<String> {
    let start = forwarded.find("host=")? + "host=".len();
    let rest = &forwarded[start..];
    let rest = rest.strip_prefix('"').unwrap_or(rest);
    let end = rest.find(['"', ';']).unwrap_or(rest.len());
    let host = rest[..end].trim();
    if host.is_empty() {
        None
    } else {
        Some(host.to_owned())
    }
}

/// Swap the port of a `host:port` string. A host with no trailing numeric
/// port (including a bare IPv6 literal) is returned unchanged.
fn replace_port(host: &str, port: &str) -> String {
    match host.rsplit_once(':') {
        Some((name, old)) if !old.is_empty() && old.chars().all(|c| c.is_ascii_digit()) => {
            format!("{name}:{port}")
        }
        _ => host.to_owned(),
    }
}
