pub mod convert;
pub mod init;

use crate::libs::convert::Direction;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write the configuration file")]
    Init(init::InitArgs),
    #[command(about = "Convert todo.txt files to Org mode (.txt -> .org)")]
    Org(convert::ConvertArgs),
    #[command(about = "Convert Org mode files back to todo.txt (.org -> .txt)")]
    Todo(convert::ConvertArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Org(args) => convert::cmd(args, Direction::ToOrg).await,
            Commands::Todo(args) => convert::cmd(args, Direction::ToTodo).await,
        }
    }
}
