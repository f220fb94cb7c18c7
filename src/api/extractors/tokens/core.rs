use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};

use super::{ACCESS_TOKEN_HEADER, AuthTokens, REFRESH_TOKEN_HEADER};

impl AuthTokens {
    /// Read both token headers from the map. Missing (or non-UTF-8) values
    /// become `None`; present values are carried through verbatim.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let value = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        Self {
            access_token: value(ACCESS_TOKEN_HEADER),
            refresh_token: value(REFRESH_TOKEN_HEADER),
        }
    }
}

impl<S> FromRequestParts<S> for AuthTokens
where
    S: Send + Sync,
{
    // Absent headers are a normal case, so extraction never rejects.
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(AuthTokens::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue};

    use super::*;

    #[test]
    fn absent_headers_are_none() {
        let tokens = AuthTokens::from_headers(&HeaderMap::new());
        assert_eq!(tokens, AuthTokens::default());
    }

    #[test]
    fn values_pass_through_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, HeaderValue::from_static("abc123"));
        headers.insert(
            REFRESH_TOKEN_HEADER,
            HeaderValue::from_static("eyJhbGciOiJFUzI1NiJ9..sig"),
        );

        let tokens = AuthTokens::from_headers(&headers);
        assert_eq!(tokens.access_token.as_deref(), Some("abc123"));
        assert_eq!(
            tokens.refresh_token.as_deref(),
            Some("eyJhbGciOiJFUzI1NiJ9..sig")
        );
    }

    #[test]
    fn empty_value_is_kept_not_dropped() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, HeaderValue::from_static(""));

        let tokens = AuthTokens::from_headers(&headers);
        assert_eq!(tokens.access_token.as_deref(), Some(""));
        assert_eq!(tokens.refresh_token, None);
    }
}
