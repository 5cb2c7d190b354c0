use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing gratitude…");
    println!("🗄️  Database   : {}", &db_path);

    let mut pool = DbPool::new(&db_path);
    pool.init_database()?;

    success(format!("Database initialized at {}", &db_path));

    ttlog_quiet(
        pool.conn()?,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 gratitude initialization completed!");
    Ok(())
}
