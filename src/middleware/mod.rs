/*
 * Responsibility
 * - Cross-cutting HTTP middleware shared by every route
 */
pub mod http;
