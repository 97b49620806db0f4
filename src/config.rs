use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Play the level in the terminal
    Interactive,
    /// Print the parsed level and exit
    Text,
    /// Print the parsed level as JSON and exit
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "sokoban")]
#[command(about = "Terminal Sokoban", long_about = None)]
pub struct Args {
    /// Path to the level file (XSB symbols, one row per line)
    #[arg(value_name = "FILE", default_value = "levels/level0.xsb")]
    pub level_file: PathBuf,

    /// What to do with the level
    #[arg(short, long, value_enum, default_value = "interactive")]
    pub mode: Mode,

    /// Directory for the log file; interactive mode logs nowhere without it
    #[arg(long, env = "SOKOBAN_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
