/*
 * Responsibility
 * - Handler から見える「token header の値」の型
 * - 値は client が送ってきたものをそのまま持つ（検証・変換なし）
 *
 * Notes
 * - header が無い場合は None。エラーにはしない
 * - token の検証・失効判定は上流の認証サービスの責務
 */

/// access token を運ぶ header 名（lookup は case-insensitive）
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";
/// refresh token を運ぶ header 名
pub const REFRESH_TOKEN_HEADER: &str = "x-refresh-token";

/// request に付いてきた token header の生の値
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}
