// system-tests/src/tools/registry.rs
// ============================================================================
// Module: Guard Tool Registry
// Description: Closed enum of external guard-rail tools.
// Purpose: Map each tool to its program name, version probe, and override.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Each variant describes one externally installed tool. Binary resolution
//! honors a per-tool environment override first; an override pointing at a
//! missing file resolves to nothing rather than falling back, so
//! misconfiguration stays visible.

use std::path::PathBuf;

/// External command-line tools exercised by the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardTool {
    /// JS/TS linter (lint layer).
    Biome,
    /// Python linter (lint layer).
    Ruff,
    /// Secret scanner (scan layer).
    Gitleaks,
    /// Filesystem vulnerability and secret scanner (scan layer).
    Trivy,
    /// Commit hook manager (hook layer).
    PreCommit,
    /// Version control prerequisite for hook-layer fixtures.
    Git,
}

impl GuardTool {
    /// Every registered tool, in layer order.
    pub const ALL: [Self; 6] =
        [Self::Biome, Self::Ruff, Self::Gitleaks, Self::Trivy, Self::PreCommit, Self::Git];

    /// Returns the conventional executable name.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Biome => "biome",
            Self::Ruff => "ruff",
            Self::Gitleaks => "gitleaks",
            Self::Trivy => "trivy",
            Self::PreCommit => "pre-commit",
            Self::Git => "git",
        }
    }

    /// Returns the argv suffix that prints a version and exits zero.
    #[must_use]
    pub const fn version_args(self) -> &'static [&'static str] {
        match self {
            // Gitleaks exposes a bare subcommand instead of a flag.
            Self::Gitleaks => &["version"],
            _ => &["--version"],
        }
    }

    /// Returns the environment variable overriding this tool's binary path.
    #[must_use]
    pub const fn env_override(self) -> &'static str {
        match self {
            Self::Biome => "GUARDRAIL_SYSTEM_TEST_BIOME_BIN",
            Self::Ruff => "GUARDRAIL_SYSTEM_TEST_RUFF_BIN",
            Self::Gitleaks => "GUARDRAIL_SYSTEM_TEST_GITLEAKS_BIN",
            Self::Trivy => "GUARDRAIL_SYSTEM_TEST_TRIVY_BIN",
            Self::PreCommit => "GUARDRAIL_SYSTEM_TEST_PRE_COMMIT_BIN",
            Self::Git => "GUARDRAIL_SYSTEM_TEST_GIT_BIN",
        }
    }

    /// Locates the tool binary without spawning it.
    #[must_use]
    pub fn resolve(self) -> Option<PathBuf> {
        if let Some(raw) = std::env::var_os(self.env_override()) {
            let candidate = PathBuf::from(raw);
            return candidate.is_file().then_some(candidate);
        }
        search_path(self.program())
    }
}

/// Walks `PATH` for the named program, honoring the platform suffix.
fn search_path(program: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    let file_name = format!("{program}{}", exe_suffix());
    std::env::split_paths(&path).map(|dir| dir.join(&file_name)).find(|cand| cand.is_file())
}

/// Returns the platform executable suffix.
const fn exe_suffix() -> &'static str {
    if cfg!(windows) { ".exe" } else { "" }
}
