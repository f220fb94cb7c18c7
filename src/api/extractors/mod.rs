/*
 * Responsibility
 * - extractor の公開インターフェース (re-export)
 */
mod tokens;

pub use tokens::{ACCESS_TOKEN_HEADER, AuthTokens, REFRESH_TOKEN_HEADER};
