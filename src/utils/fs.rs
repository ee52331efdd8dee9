use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLookup {
    pub display_path: String,
    pub found: bool,
}

pub fn relative_path(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

pub fn resolve_asset_dir(base: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}

/// Checks for `file_name` under the assets directory. A missing file is a
/// normal outcome here, callers decide how to surface it.
pub fn lookup_asset(base: &Path, assets_dir: &Path, file_name: &str) -> AssetLookup {
    let path = resolve_asset_dir(base, assets_dir).join(file_name);
    let found = path.is_file();

    AssetLookup {
        display_path: relative_path(base, &path),
        found,
    }
}
