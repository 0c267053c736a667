use crate::commands::{CmdMessage, CmdResult};
use crate::config::StocklogConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDataFile(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StocklogConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {
            result = result.with_config(config);
        }
        ConfigAction::SetDataFile(name) => {
            config.set_data_file(&name);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("data-file set to {}", name)));
            result = result.with_config(config);
        }
    }

    Ok(result)
}
