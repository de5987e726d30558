use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::records;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", cfg.database);

    let store = super::open_store(&cfg)?;
    let drinks = records::load_drinks(&store)?;

    store.audit(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database),
    );

    success(format!(
        "bakdag initialized ({} drinks in the catalog)",
        drinks.len()
    ));
    Ok(())
}
