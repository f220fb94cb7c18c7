/*
 * Responsibility
 * - GET /authentication-required
 * - x-access-token / x-refresh-token を読み取り、値をログに出す
 * - token の検証は行わない（検証は上流の認証サービスの責務。ここは連携デモ）
 */
use crate::api::extractors::AuthTokens;

pub const AUTHENTICATED_BODY: &str = "You are authenticated!";

pub async fn authentication_required(tokens: AuthTokens) -> &'static str {
    // Values go to the log verbatim; a missing header is not an error.
    tracing::info!(
        access_token = ?tokens.access_token,
        refresh_token = ?tokens.refresh_token,
        "received authentication headers"
    );

    AUTHENTICATED_BODY
}
