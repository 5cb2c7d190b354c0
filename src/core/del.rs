use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::count_entries;
use crate::db::store::EntryStore;
use crate::errors::AppResult;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the entry for `date`. Returns whether one existed.
    pub fn delete_one(pool: &mut DbPool, date: &str) -> AppResult<bool> {
        let existed = pool.get_entry_by_date(date)?.is_some();
        if !existed {
            return Ok(false);
        }

        pool.delete_entry(date)?;
        ttlog_quiet(pool.conn()?, "del", date, "Entry deleted");
        Ok(true)
    }

    /// Delete every entry. Returns how many there were.
    pub fn delete_all(pool: &mut DbPool) -> AppResult<i64> {
        let n = count_entries(pool.conn()?)?;
        pool.delete_all_entries()?;
        ttlog_quiet(
            pool.conn()?,
            "del_all",
            "",
            &format!("{} entries deleted", n),
        );
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_one_reports_presence() {
        let mut pool = DbPool::in_memory();
        pool.save_entry("2024-01-01", "x").unwrap();
        assert!(DeleteLogic::delete_one(&mut pool, "2024-01-01").unwrap());
        assert!(!DeleteLogic::delete_one(&mut pool, "2024-01-01").unwrap());
    }

    #[test]
    fn delete_all_counts() {
        let mut pool = DbPool::in_memory();
        pool.save_entry("2024-01-01", "x").unwrap();
        pool.save_entry("2024-01-02", "y").unwrap();
        assert_eq!(DeleteLogic::delete_all(&mut pool).unwrap(), 2);
        assert_eq!(DeleteLogic::delete_all(&mut pool).unwrap(), 0);
        assert!(pool.get_all_entries().unwrap().is_empty());
    }
}
