/*
 * Responsibility
 * - GET / (疎通用の welcome banner)
 * - request header には一切依存しない
 */

pub const WELCOME_BANNER: &str = "Welcome to the Stack Auth Python Flask Backend!";

pub async fn welcome() -> &'static str {
    WELCOME_BANNER
}
