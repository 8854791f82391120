use crate::cli::commands::Context;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes a default
/// configuration file. In test mode nothing is written.
pub fn handle(ctx: &Context) -> AppResult<()> {
    let path = &ctx.config_path;

    if path.exists() && !ctx.test {
        info(format!("Configuration already present: {}", path.display()));
        return Ok(());
    }

    Config::init_at(path, ctx.test)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
