use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::ListKeeperConfig;
use crate::error::Result;
use crate::model::NoteColor;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDefaultColor(NoteColor),
    SetDateFormat(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ListKeeperConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetDefaultColor(color) => {
            config.set_default_color(color);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "default-color set to {}",
                color.name()
            )));
        }
        ConfigAction::SetDateFormat(format) => {
            config.set_date_format(&format);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "date-format set to {}",
                format
            )));
        }
    }

    Ok(result.with_config(config))
}
