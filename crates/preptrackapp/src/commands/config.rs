use crate::commands::{CmdMessage, CmdResult};
use crate::config::PrepConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    Template,
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = PrepConfig::load(data_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::Template => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(PrepConfig::template()));
            Ok(result)
        }
    }
}
