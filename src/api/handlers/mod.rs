/*
 * Responsibility
 * - route handler の公開 (welcome / authenticated)
 */
pub mod authenticated;
pub mod welcome;
