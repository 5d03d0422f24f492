//! Board → platform → architecture resolution.
//!
//! Resolution cross-references the three catalogs and produces one
//! immutable [`ResolvedTarget`] bundling the full chain. It is
//! all-or-nothing: any missing link fails with an error enumerating the
//! valid alternatives, and no partial result is returned.

use crate::arch::Architecture;
use crate::board::Board;
use crate::catalog::Catalog;
use crate::error::{Result, TargetError};
use crate::platform::Platform;

/// A fully cross-referenced build target.
///
/// Invariants hold by construction: `board.platform == platform.name` and
/// `platform.arch_name == arch.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// The selected board.
    pub board: Board,
    /// The platform the board declares.
    pub platform: Platform,
    /// The architecture the platform declares.
    pub arch: Architecture,
}

/// Resolve a board name through the platform and architecture catalogs.
pub fn resolve(
    board_name: &str,
    boards: &Catalog<Board>,
    platforms: &Catalog<Platform>,
    archs: &Catalog<Architecture>,
) -> Result<ResolvedTarget> {
    let board = boards
        .get(board_name)
        .ok_or_else(|| TargetError::UnknownBoard {
            name: board_name.to_string(),
            available: boards.names().join(", "),
        })?;

    let platform = platforms
        .get(&board.platform)
        .ok_or_else(|| TargetError::UnknownPlatform {
            name: board.platform.clone(),
            available: platforms.names().join(", "),
        })?;

    let arch = archs
        .get(&platform.arch_name)
        .ok_or_else(|| TargetError::UndefinedArchitecture {
            name: platform.arch_name.clone(),
            platform: platform.name.clone(),
            available: archs.names().join(", "),
        })?;

    log::debug!(
        "resolved board '{}' -> platform '{}' -> arch '{}' ({})",
        board.name,
        platform.name,
        arch.name,
        arch.target
    );

    Ok(ResolvedTarget {
        board: board.clone(),
        platform: platform.clone(),
        arch: arch.clone(),
    })
}
