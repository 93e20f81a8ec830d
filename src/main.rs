use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use dokura::{collect_events, render};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(cli_config: Option<&Path>, file: &Option<PathBuf>) -> io::Result<dokura::Config> {
    let start_dir = start_dir_for(file)?;
    let (config, config_path) = dokura::config::load(cli_config, &start_dir)?;

    if let Some(path) = &config_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(config)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { file } => {
            let config = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            print!("{}", render(&input, Some(config)));
            Ok(())
        }
        Commands::Events { file, json } => {
            let config = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let events = collect_events(&input, Some(config));

            if json {
                let out = serde_json::to_string_pretty(&events)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                println!("{out}");
            } else {
                for event in &events {
                    println!("{event:?}");
                }
            }
            Ok(())
        }
    }
}
