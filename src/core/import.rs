use crate::codec::{ImportReport, import_document};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use std::fs;

pub struct ImportLogic;

impl ImportLogic {
    /// Read a CSV file and upsert its entries.
    ///
    /// Bad lines are reported and skipped. The import fails as a whole
    /// only when the file cannot be read, has no data lines, or not a
    /// single line could be imported.
    pub fn import(pool: &mut DbPool, file: &str) -> AppResult<ImportReport> {
        let path = expand_tilde(file);
        let doc = fs::read_to_string(&path)?;

        let report = import_document(&doc, pool)?;

        for f in &report.failures {
            warning(format!("Line {}: {}", f.line, f.reason));
        }

        ttlog_quiet(
            pool.conn()?,
            "import",
            &path.to_string_lossy(),
            &format!("{} imported, {} failed", report.imported, report.failed),
        );

        if report.imported == 0 {
            return Err(AppError::Validation(
                "No valid entries found in the CSV file.".into(),
            ));
        }

        success(report.summary());
        Ok(report)
    }
}
