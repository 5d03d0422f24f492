//! Application entry-point discovery.

use crate::error::Result;
use crate::layout::Layout;

/// File-name prefix marking an application entry point.
const APP_PREFIX: &str = "app_";

/// Scan `src/apps` for `app_<name>.<ext>` files and return the names.
///
/// Purely a naming-convention projection — file contents are never
/// inspected. Order follows directory enumeration order and is not
/// guaranteed sorted. A missing apps directory yields an empty list.
pub fn discover_applications(layout: &Layout) -> Result<Vec<String>> {
    let dir = layout.apps_dir();
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if let Some(rest) = file_name.strip_prefix(APP_PREFIX) {
                if let Some((name, _ext)) = rest.rsplit_once('.') {
                    if !name.is_empty() {
                        names.push(name.to_string());
                    }
                }
            }
        }
    }

    log::debug!("discovered {} application(s) under {}", names.len(), dir.display());
    Ok(names)
}
