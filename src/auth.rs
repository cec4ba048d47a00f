use crate::error::{HlError, Result};

const BEARER: &str = "bearer";

/// Bearer token gate for the `/loc` endpoint.
#[derive(Clone, PartialEq, Eq)]
pub enum LocAuth {
    Disabled,
    Required(&'static str),
}

impl LocAuth {
    /// An empty token disables auth.
    pub fn new(token: &'static str) -> Self {
        if token.is_empty() {
            LocAuth::Disabled
        } else {
            LocAuth::Required(token)
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, LocAuth::Required(_))
    }

    /// Checks the value of an `Authorization` header.
    pub fn authorize(&self, header: Option<&str>) -> Result<()> {
        let expected = match self {
            LocAuth::Disabled => return Ok(()),
            LocAuth::Required(token) => token,
        };
        let presented = header.and_then(bearer_token).ok_or(HlError::Unauthorized)?;
        if constant_time_eq(presented.as_bytes(), expected.as_bytes()) {
            Ok(())
        } else {
            Err(HlError::Unauthorized)
        }
    }
}

impl std::fmt::Debug for LocAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocAuth::Disabled => write!(f, "Disabled"),
            LocAuth::Required(_) => write!(f, "Required(<redacted>)"),
        }
    }
}

fn bearer_token(header: &str) -> Option<&str> {
    let header = header.trim();
    let (scheme, token) = header.split_once(char::is_whitespace)?;
    if !scheme.eq_ignore_ascii_case(BEARER) {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

// Runtime depends on the length only, not on where the first mismatch is.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_disables_auth() {
        let auth = LocAuth::new("");
        assert!(!auth.is_enabled());
        assert!(auth.authorize(None).is_ok());
        assert!(auth.authorize(Some("Bearer whatever")).is_ok());
    }

    #[test]
    fn matching_bearer_passes() {
        let auth = LocAuth::new("s3cret");
        assert!(auth.is_enabled());
        assert!(auth.authorize(Some("Bearer s3cret")).is_ok());
        assert!(auth.authorize(Some("bearer s3cret")).is_ok());
        assert!(auth.authorize(Some("  BEARER   s3cret  ")).is_ok());
    }

    #[test]
    fn everything_else_is_rejected() {
        let auth = LocAuth::new("s3cret");
        for header in [
            None,
            Some(""),
            Some("Bearer"),
            Some("Bearer "),
            Some("Bearer s3cre"),
            Some("Bearer s3cret2"),
            Some("Bearer S3CRET"),
            Some("Basic s3cret"),
            Some("s3cret"),
        ] {
            assert!(
                matches!(auth.authorize(header), Err(HlError::Unauthorized)),
                "accepted {:?}",
                header
            );
        }
    }

    #[test]
    fn debug_hides_token() {
        let text = format!("{:?}", LocAuth::new("s3cret"));
        assert!(!text.contains("s3cret"));
    }

    #[test]
    fn compare() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}
