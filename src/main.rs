//! glitch - a glitch-themed terminal experience
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use glitch_core::prelude::*;
use glitch_state::LaunchOptions;

/// glitch - cycle through colour perspectives, one glitch at a time
#[derive(Parser, Debug)]
#[command(name = "glitch")]
#[command(about = "A glitch-themed terminal experience", long_about = None)]
struct Args {
    /// Theme to open with, by id or name (e.g. `chaos` or `Static`)
    #[arg(long, value_name = "ID|NAME")]
    theme: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Write the default config file and exit
    #[arg(long)]
    write_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_themes {
        print!("{}", glitch_state::theme_table());
        return Ok(());
    }

    if args.write_config {
        let (path, created) = glitch_state::write_config(args.config)?;
        if created {
            println!("Wrote default config to {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    let options = LaunchOptions {
        theme: args.theme,
        config: args.config,
    };
    if let Err(e) = glitch_state::run(options).await {
        eprintln!("glitch: {}", e);
        std::process::exit(glitch_state::exit_code(&e));
    }
    Ok(())
}
