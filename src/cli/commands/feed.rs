use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::records;
use crate::ui::render;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Feed { limit } = cmd {
        let store = super::open_store(cfg)?;
        let check_ins = records::load_check_ins(&store)?;

        let limit = limit.unwrap_or(cfg.feed_limit);
        print!(
            "{}",
            render::feed(&check_ins, Utc::now(), limit, &cfg.separator_char)
        );
    }

    Ok(())
}
