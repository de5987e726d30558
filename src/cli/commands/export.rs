use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::store::records;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = super::open_store(cfg)?;
        let check_ins = records::load_check_ins(&store)?;

        ExportLogic::export(&check_ins, *format, Path::new(file), *force)?;

        store.audit(
            "export",
            file,
            &format!("{} check-ins exported as {}", check_ins.len(), format.as_str()),
        );
    }

    Ok(())
}
