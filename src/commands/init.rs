use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Reset an existing configuration to the defaults
    #[arg(short, long)]
    reset: bool,
}

/// Writes the configuration file, keeping existing values unless `--reset` is given.
pub fn cmd(args: InitArgs) -> Result<()> {
    let config = if args.reset { Config::default() } else { Config::read()? };
    let path = config.save()?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}
