// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8, empty values, and malformed overrides fail
//! closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardrailEnv {
    /// Optional artifact run root override.
    RunRoot,
    /// Optional timeout floor in seconds (positive integer).
    TimeoutSeconds,
    /// Allow reusing an existing run root (`true`/`false` or `1`/`0`).
    AllowOverwrite,
    /// Optional operator-provided hook config copied into fixture repos.
    HookConfig,
    /// Optional pre-commit cache directory forwarded to hook invocations.
    PreCommitHome,
}

impl GuardrailEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RunRoot => "GUARDRAIL_SYSTEM_TEST_RUN_ROOT",
            Self::TimeoutSeconds => "GUARDRAIL_SYSTEM_TEST_TIMEOUT_SEC",
            Self::AllowOverwrite => "GUARDRAIL_SYSTEM_TEST_ALLOW_OVERWRITE",
            Self::HookConfig => "GUARDRAIL_SYSTEM_TEST_HOOK_CONFIG",
            Self::PreCommitHome => "GUARDRAIL_SYSTEM_TEST_PRE_COMMIT_HOME",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Optional artifact run root override.
    pub run_root: Option<PathBuf>,
    /// Optional timeout floor applied to every subprocess class.
    pub timeout: Option<Duration>,
    /// Allow reusing an existing run root.
    pub allow_overwrite: bool,
    /// Optional operator-provided hook config path.
    pub hook_config: Option<PathBuf>,
    /// Optional pre-commit cache directory.
    pub pre_commit_home: Option<PathBuf>,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (for example, an invalid timeout or boolean
    /// value).
    pub fn load() -> Result<Self, String> {
        let run_root = read_env_nonempty(GuardrailEnv::RunRoot.as_str())?.map(PathBuf::from);
        let timeout = read_env_nonempty(GuardrailEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(GuardrailEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let allow_overwrite = parse_bool_env(
            GuardrailEnv::AllowOverwrite.as_str(),
            read_env_nonempty(GuardrailEnv::AllowOverwrite.as_str())?,
        )?;
        let hook_config = read_env_nonempty(GuardrailEnv::HookConfig.as_str())?.map(PathBuf::from);
        let pre_commit_home =
            read_env_nonempty(GuardrailEnv::PreCommitHome.as_str())?.map(PathBuf::from);
        Ok(Self {
            run_root,
            timeout,
            allow_overwrite,
            hook_config,
            pre_commit_home,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a boolean environment variable with permissive defaults.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}
