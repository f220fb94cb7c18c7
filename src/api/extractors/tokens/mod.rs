/*!
 * Authentication token headers extractor
 *
 * Responsibility:
 * - client が送ってきた x-access-token / x-refresh-token を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - AuthTokens
 * - ACCESS_TOKEN_HEADER / REFRESH_TOKEN_HEADER
 */

mod core;
mod types;

pub use types::{ACCESS_TOKEN_HEADER, AuthTokens, REFRESH_TOKEN_HEADER};
