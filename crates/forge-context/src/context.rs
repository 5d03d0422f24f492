//! The per-process build context.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use forge_targets::{resolve, Architecture, Board, Catalog, Platform, ResolvedTarget};

use crate::apps::discover_applications;
use crate::environment::BuildEnv;
use crate::error::{ContextError, Result};
use crate::flags::config_flags;
use crate::layout::Layout;
use crate::toolchain::{GccLocator, LibgccLocator, ToolchainSettings};
use crate::tracking::{define_tracking_targets, TrackingTargets};

static INSTANCE: OnceLock<Arc<BuildContext>> = OnceLock::new();

/// The fully resolved build configuration for one process.
///
/// Owns the three catalogs, the resolved target, the derived environment,
/// the discovered applications, and the tracking sentinels. Read-only
/// after construction except for the append-only library-name cache.
#[derive(Debug)]
pub struct BuildContext {
    layout: Layout,
    boards: Catalog<Board>,
    platforms: Catalog<Platform>,
    archs: Catalog<Architecture>,
    target: ResolvedTarget,
    config_flags: Vec<String>,
    env: BuildEnv,
    applications: Vec<String>,
    tracking: TrackingTargets,
    rlib_names: Mutex<HashMap<PathBuf, String>>,
}

impl BuildContext {
    /// Build and register the process-wide context.
    ///
    /// Resolves the toolchain settings from the environment and queries
    /// the real cross gcc. Fails with
    /// [`ContextError::AlreadyInitialized`] on a second call.
    pub fn create(root_marker: &Path, board: &str) -> Result<Arc<BuildContext>> {
        let settings = ToolchainSettings::resolve()?;
        Self::create_with(root_marker, board, &GccLocator, settings)
    }

    /// Build and register the process-wide context with an injected
    /// locator and pre-resolved settings.
    pub fn create_with(
        root_marker: &Path,
        board: &str,
        locator: &dyn LibgccLocator,
        settings: ToolchainSettings,
    ) -> Result<Arc<BuildContext>> {
        if INSTANCE.get().is_some() {
            return Err(ContextError::AlreadyInitialized);
        }
        let context = Arc::new(Self::build(root_marker, board, locator, settings)?);
        INSTANCE
            .set(Arc::clone(&context))
            .map_err(|_| ContextError::AlreadyInitialized)?;
        Ok(context)
    }

    /// The registered context, or `None` before the first `create`.
    pub fn instance() -> Option<Arc<BuildContext>> {
        INSTANCE.get().cloned()
    }

    /// Build a context without registering it.
    ///
    /// Intended for tests and embedding; [`create`](Self::create) is the
    /// production entry point.
    pub fn with_locator(
        root_marker: &Path,
        board: &str,
        locator: &dyn LibgccLocator,
        settings: ToolchainSettings,
    ) -> Result<BuildContext> {
        Self::build(root_marker, board, locator, settings)
    }

    fn build(
        root_marker: &Path,
        board: &str,
        locator: &dyn LibgccLocator,
        settings: ToolchainSettings,
    ) -> Result<BuildContext> {
        let layout = Layout::new(root_marker);
        let root = layout.root_dir().to_path_buf();

        log::debug!("loading catalogs from {}", root.display());
        let boards = Catalog::load(&root.join("boards.toml"))?;
        let platforms = Catalog::load(&root.join("platforms.toml"))?;
        let archs = Catalog::load(&root.join("architectures.toml"))?;

        let target = resolve(board, &boards, &platforms, &archs)?;
        let config_flags = config_flags(&target);
        let applications = discover_applications(&layout)?;
        let env = BuildEnv::derive(&target, &config_flags, &settings, locator)?;
        let tracking = define_tracking_targets(&layout, &target)?;

        log::info!(
            "build context ready: board '{}' on '{}' ({})",
            target.board.name,
            target.platform.name,
            target.arch.target
        );

        Ok(BuildContext {
            layout,
            boards,
            platforms,
            archs,
            target,
            config_flags,
            env,
            applications,
            tracking,
            rlib_names: Mutex::new(HashMap::new()),
        })
    }

    /// Project filesystem layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The board catalog.
    pub fn boards(&self) -> &Catalog<Board> {
        &self.boards
    }

    /// The platform catalog.
    pub fn platforms(&self) -> &Catalog<Platform> {
        &self.platforms
    }

    /// The architecture catalog.
    pub fn archs(&self) -> &Catalog<Architecture> {
        &self.archs
    }

    /// The resolved board → platform → architecture chain.
    pub fn target(&self) -> &ResolvedTarget {
        &self.target
    }

    /// Raw config flags, in derivation order.
    pub fn config_flags(&self) -> &[String] {
        &self.config_flags
    }

    /// The derived build environment.
    pub fn env(&self) -> &BuildEnv {
        &self.env
    }

    /// Discovered application names.
    pub fn applications(&self) -> &[String] {
        &self.applications
    }

    /// The target-drift sentinels.
    pub fn tracking(&self) -> &TrackingTargets {
        &self.tracking
    }

    /// Library file name for a source file, memoized per path.
    ///
    /// The cache is append-only: the same source path always maps to the
    /// same name, so concurrent readers only ever race on inserting an
    /// identical value.
    pub fn rlib_name(&self, src: &Path) -> String {
        let mut cache = self
            .rlib_names
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        cache
            .entry(src.to_path_buf())
            .or_insert_with(|| rlib_file_name(src))
            .clone()
    }
}

/// Library file name generated for a source file.
fn rlib_file_name(src: &Path) -> String {
    let stem = src
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("module");
    format!("lib{stem}.rlib")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::TrackingState;

    struct StubLocator;

    impl LibgccLocator for StubLocator {
        fn libgcc_file_name(&self, _toolchain: &str, _cflags: &[String]) -> Result<String> {
            Ok("/stub/libgcc.a".to_string())
        }
    }

    fn settings() -> ToolchainSettings {
        ToolchainSettings {
            rustc: "rustc".into(),
            toolchain: "arm-none-eabi-".into(),
        }
    }

    fn write_project(root: &Path) {
        std::fs::write(
            root.join("boards.toml"),
            "[foo]\nplatform = \"bar\"\nfeatures = [\"y\"]\n",
        )
        .unwrap();
        std::fs::write(
            root.join("platforms.toml"),
            "[bar]\narch = \"arm\"\nfeatures = [\"x\"]\n",
        )
        .unwrap();
        std::fs::write(
            root.join("architectures.toml"),
            "[arm]\ntarget = \"thumbv7m\"\ncpu = \"cortex-m3\"\n",
        )
        .unwrap();
        let apps = root.join("src/apps");
        std::fs::create_dir_all(&apps).unwrap();
        std::fs::write(apps.join("app_blink.rs"), b"").unwrap();
    }

    #[test]
    fn full_construction_from_fixture_project() {
        let dir = tempfile::tempdir().unwrap();
        write_project(dir.path());

        let context =
            BuildContext::with_locator(dir.path(), "foo", &StubLocator, settings()).unwrap();

        assert_eq!(context.target().board.name, "foo");
        assert_eq!(
            context.config_flags(),
            &["cfg_y", "cfg_x", "board_foo", "mcu_bar", "arch_arm"]
        );
        assert!(context
            .env()
            .rustc_flags_cross
            .contains(&"--target thumbv7m".to_string()));
        assert_eq!(context.applications(), &["blink"]);
        assert_eq!(context.tracking().triple.current(), "thumbv7m");
        assert_eq!(context.boards().len(), 1);
    }

    #[test]
    fn construction_fails_on_unknown_board() {
        let dir = tempfile::tempdir().unwrap();
        write_project(dir.path());

        let err = BuildContext::with_locator(dir.path(), "nope", &StubLocator, settings())
            .unwrap_err();
        assert!(matches!(
            err,
            ContextError::Target(forge_targets::TargetError::UnknownBoard { .. })
        ));
    }

    #[test]
    fn tracking_sentinels_are_live_after_construction() {
        let dir = tempfile::tempdir().unwrap();
        write_project(dir.path());

        let context =
            BuildContext::with_locator(dir.path(), "foo", &StubLocator, settings()).unwrap();

        assert_eq!(
            context.tracking().triple.evaluate().unwrap(),
            TrackingState::Changed
        );
        assert_eq!(
            context.tracking().triple.evaluate().unwrap(),
            TrackingState::Unchanged
        );
    }

    #[test]
    fn rlib_names_are_memoized() {
        let dir = tempfile::tempdir().unwrap();
        write_project(dir.path());

        let context =
            BuildContext::with_locator(dir.path(), "foo", &StubLocator, settings()).unwrap();

        let src = Path::new("src/hal/bar/timer.rs");
        assert_eq!(context.rlib_name(src), "libtimer.rlib");
        assert_eq!(context.rlib_name(src), "libtimer.rlib");
        assert_eq!(context.rlib_name(Path::new("src/other.rs")), "libother.rlib");
    }

    /// The only test touching the process-wide singleton slot.
    #[test]
    fn create_registers_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        write_project(dir.path());

        assert!(BuildContext::instance().is_none());

        let context =
            BuildContext::create_with(dir.path(), "foo", &StubLocator, settings()).unwrap();
        assert_eq!(context.target().board.name, "foo");
        assert!(BuildContext::instance().is_some());

        let err = BuildContext::create_with(dir.path(), "foo", &StubLocator, settings())
            .unwrap_err();
        assert!(matches!(err, ContextError::AlreadyInitialized));
    }
}
