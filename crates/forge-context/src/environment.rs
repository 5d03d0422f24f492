//! Build environment derivation.
//!
//! Everything here is a pure function of the resolved target except the
//! linker input, which comes from asking the installed cross toolchain
//! where its runtime support library lives.

use forge_targets::ResolvedTarget;

use crate::error::Result;
use crate::flags::cfg_arguments;
use crate::toolchain::{LibgccLocator, ToolchainSettings};

/// The complete derived build environment for one resolved target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnv {
    /// Cross-compilation rustc flags: target triple, CPU, relocation model.
    pub rustc_flags_cross: Vec<String>,
    /// Common rustc flags: optimization, unwind metadata, config flags.
    pub rustc_flags: Vec<String>,
    /// The `--cfg` tokens on their own.
    pub config_flags: Vec<String>,
    /// C compiler flags for the cross toolchain.
    pub cflags: Vec<String>,
    /// Linker inputs; holds the libgcc path reported by the toolchain.
    pub ldflags: Vec<String>,
    /// Rust compiler executable.
    pub rustc: String,
    /// Cross-toolchain prefix.
    pub toolchain: String,
}

impl BuildEnv {
    /// Derive the environment for a resolved target.
    ///
    /// `config_flags` are the raw tokens from
    /// [`crate::flags::config_flags`]; they are wrapped as `--cfg`
    /// arguments here. The libgcc path is the one value that depends on
    /// the installed toolchain rather than on the target alone.
    pub fn derive(
        target: &ResolvedTarget,
        config_flags: &[String],
        settings: &ToolchainSettings,
        locator: &dyn LibgccLocator,
    ) -> Result<Self> {
        let rustc_flags_cross = vec![
            format!("--target {}", target.arch.target),
            format!("-Ctarget-cpu={}", target.arch.cpu),
            "-C relocation_model=static".to_string(),
        ];

        let cfg_args = cfg_arguments(config_flags);

        let mut rustc_flags = vec![
            "--opt-level 2".to_string(),
            "-Z no-landing-pads".to_string(),
        ];
        rustc_flags.extend(cfg_args.iter().cloned());

        let cflags = vec!["-mthumb".to_string(), format!("-mcpu={}", target.arch.cpu)];

        let libgcc = locator.libgcc_file_name(&settings.toolchain, &cflags)?;

        Ok(BuildEnv {
            rustc_flags_cross,
            rustc_flags,
            config_flags: cfg_args,
            cflags,
            ldflags: vec![libgcc],
            rustc: settings.rustc.clone(),
            toolchain: settings.toolchain.clone(),
        })
    }
}
