//! Conditional-compilation flag derivation.

use forge_targets::ResolvedTarget;

/// Derive the raw config flags for a resolved target.
///
/// Fixed order: board features, platform features, then the
/// `board_<name>` / `mcu_<name>` / `arch_<name>` identity flags. The
/// sequence is stable across runs for the same target. Duplicate feature
/// names are passed through unchanged: a feature declared by both the
/// board and the platform is emitted twice.
pub fn config_flags(target: &ResolvedTarget) -> Vec<String> {
    let mut flags =
        Vec::with_capacity(target.board.features.len() + target.platform.features.len() + 3);

    flags.extend(target.board.features.iter().map(|f| format!("cfg_{f}")));
    flags.extend(target.platform.features.iter().map(|f| format!("cfg_{f}")));

    flags.push(format!("board_{}", target.board.name));
    flags.push(format!("mcu_{}", target.platform.name));
    flags.push(format!("arch_{}", target.arch.name));

    flags
}

/// Wrap raw config flags as `--cfg` compiler arguments.
pub fn cfg_arguments(flags: &[String]) -> Vec<String> {
    flags.iter().map(|f| format!("--cfg {f}")).collect()
}
