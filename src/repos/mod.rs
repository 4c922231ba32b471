/*
 * Responsibility
 * - Persistence access for fortunes (trait + backends)
 */
pub mod fortune;
