use crate::codec::{encode_entries, export_filename};
use crate::core::fs_utils::ensure_writable;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

pub struct ExportLogic;

impl ExportLogic {
    /// Where the export goes: `file` as given, otherwise the conventional
    /// `gratitude-export-<timestamp>.csv` inside `dir` (default: cwd).
    pub fn resolve_target(file: Option<&str>, dir: Option<&str>) -> PathBuf {
        match file {
            Some(f) => expand_tilde(f),
            None => {
                let base = dir.map(expand_tilde).unwrap_or_else(|| PathBuf::from("."));
                base.join(export_filename(Utc::now()))
            }
        }
    }

    /// Export every entry (newest first) as CSV.
    ///
    /// Returns the written path, or `None` when there was nothing to export.
    pub fn export(
        pool: &mut DbPool,
        file: Option<&str>,
        dir: Option<&str>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let entries = pool.get_all_entries()?;

        if entries.is_empty() {
            warning("There are no gratitude entries to export.");
            return Ok(None);
        }

        let path = Self::resolve_target(file, dir);
        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let doc = encode_entries(&entries)?;
        fs::write(&path, doc)?;

        success(format!(
            "Exported {} entries to {}",
            entries.len(),
            path.display()
        ));
        ttlog_quiet(
            pool.conn()?,
            "export",
            &path.to_string_lossy(),
            &format!("{} entries exported", entries.len()),
        );

        Ok(Some(path))
    }
}
