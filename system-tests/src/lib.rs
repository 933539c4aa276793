// system-tests/src/lib.rs
// ============================================================================
// Module: Guardrail System Tests Library
// Description: Shared configuration, fixtures, and tool registry.
// Purpose: Provide common utilities for Guardrail system-test binaries.
// Dependencies: std, serde, serde_yaml
// ============================================================================

//! ## Overview
//! This crate hosts the shared configuration, fixture corpus, external tool
//! registry, and hook-config rendering used by the Guardrail system-test
//! binaries in `system-tests/tests`.
//! Security posture: fixture inputs are intentionally unsafe source text; they
//! are written to disk for scanning only and are never executed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod fixtures;
pub mod hook_config;
pub mod tools;
