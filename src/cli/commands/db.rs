use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, success, warning};
use crate::utils::date::is_db_date_syntax;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database);

        if *info {
            header("Database info");
            print_db_info(&mut pool)?;
        }

        if *check {
            let conn = pool.conn()?;
            let result: String = conn.query_row("PRAGMA integrity_check", [], |r| r.get(0))?;
            if result == "ok" {
                success("Database integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", result));
            }

            let mut stmt = conn.prepare("SELECT date FROM gratitude_entries")?;
            let odd: Vec<String> = stmt
                .query_map([], |r| r.get::<_, String>(0))?
                .filter_map(Result::ok)
                .filter(|d| !is_db_date_syntax(d))
                .collect();
            if !odd.is_empty() {
                warning(format!(
                    "{} entries have a malformed date key:",
                    bold(&odd.len().to_string())
                ));
                for d in odd {
                    println!("   {}", d);
                }
            }
        }

        if *vacuum {
            pool.with_conn(|conn| {
                conn.execute_batch("VACUUM;")?;
                ttlog_quiet(conn, "vacuum", "", "Database vacuumed");
                Ok(())
            })?;
            success("Database vacuumed.");
        }
    }
    Ok(())
}
