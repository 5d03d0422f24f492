//! Toolchain executable resolution and the external libgcc query.

use std::process::Command;

use crate::error::{ContextError, Result};

/// Compiler and cross-toolchain executables resolved for this build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainSettings {
    /// Rust compiler executable.
    pub rustc: String,
    /// Cross-toolchain prefix (e.g. `arm-none-eabi-`).
    pub toolchain: String,
}

impl ToolchainSettings {
    /// Resolve both settings from the process environment, falling back to
    /// the constants compiled into this crate.
    pub fn resolve() -> Result<Self> {
        Ok(ToolchainSettings {
            rustc: env_or_const("RUSTC", option_env!("RUSTC"))?,
            toolchain: env_or_const("TOOLCHAIN", option_env!("TOOLCHAIN"))?,
        })
    }
}

/// Probe the named sources in order: the process environment variable
/// first, then the compiled-in constant. Fails naming the constant when
/// both are absent.
pub fn env_or_const(name: &'static str, compiled: Option<&str>) -> Result<String> {
    if let Ok(value) = std::env::var(name) {
        return Ok(value);
    }
    match compiled {
        Some(value) => Ok(value.to_string()),
        None => Err(ContextError::UndefinedToolchainConstant { name }),
    }
}

/// Locates the target's runtime support library by asking the cross
/// toolchain.
///
/// Injected into environment derivation so tests can substitute a
/// deterministic stub for the external process.
pub trait LibgccLocator {
    /// Return the path printed by `<toolchain>gcc -print-libgcc-file-name`.
    fn libgcc_file_name(&self, toolchain: &str, cflags: &[String]) -> Result<String>;
}

/// Real locator that spawns the cross gcc.
#[derive(Debug, Default)]
pub struct GccLocator;

impl LibgccLocator for GccLocator {
    fn libgcc_file_name(&self, toolchain: &str, cflags: &[String]) -> Result<String> {
        let program = format!("{toolchain}gcc");
        let rendered = format!("{program} -print-libgcc-file-name {}", cflags.join(" "));

        let output = Command::new(&program)
            .arg("-print-libgcc-file-name")
            .args(cflags)
            .output()
            .map_err(|e| ContextError::ToolchainQueryFailed {
                command: rendered.clone(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ContextError::ToolchainQueryFailed {
                command: rendered,
                detail: format!("exit status {}", output.status),
            });
        }

        let path = String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string();
        if path.is_empty() {
            return Err(ContextError::ToolchainQueryFailed {
                command: rendered,
                detail: "toolchain printed no library path".to_string(),
            });
        }

        log::debug!("libgcc for '{toolchain}': {path}");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_wins_over_compiled_constant() {
        std::env::set_var("FORGE_TEST_ENV_WINS", "from-env");
        let value = env_or_const("FORGE_TEST_ENV_WINS", Some("compiled")).unwrap();
        assert_eq!(value, "from-env");
    }

    #[test]
    fn compiled_constant_is_the_fallback() {
        let value = env_or_const("FORGE_TEST_UNSET_FALLBACK", Some("compiled")).unwrap();
        assert_eq!(value, "compiled");
    }

    #[test]
    fn all_sources_absent_names_the_constant() {
        let err = env_or_const("FORGE_TEST_UNSET_NONE", None).unwrap_err();
        assert!(matches!(
            err,
            ContextError::UndefinedToolchainConstant {
                name: "FORGE_TEST_UNSET_NONE"
            }
        ));
        assert!(err.to_string().contains("FORGE_TEST_UNSET_NONE"));
    }

    #[test]
    fn missing_cross_gcc_is_a_query_failure() {
        let err = GccLocator
            .libgcc_file_name("no-such-toolchain-prefix-", &[])
            .unwrap_err();
        match err {
            ContextError::ToolchainQueryFailed { command, .. } => {
                assert!(command.contains("no-such-toolchain-prefix-gcc"));
                assert!(command.contains("-print-libgcc-file-name"));
            }
            other => panic!("expected ToolchainQueryFailed, got {other:?}"),
        }
    }
}
