use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        print!("{}", cfg.to_yaml()?);
        Ok(())
    }

    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        Config::default().save(path, force)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }
}
