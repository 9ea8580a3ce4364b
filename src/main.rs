// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::Result;
use mp3merge::app::{self, shuffle_rng};
use mp3merge::config::LogLevel;
use mp3merge::{MergerConfig, NativeDialogs};
use std::env;

fn print_usage() {
    println!("MP3MERGE - Concatenate MP3 files");
    println!();
    println!("Usage: mp3merge [OPTIONS]");
    println!();
    println!("With no options, opens dialogs to pick the files to merge and");
    println!("where to save the result.");
    println!();
    println!("Options:");
    println!("  --config <FILE>   Load settings from a YAML file");
    println!("  --help            Show this help message");
}

fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(level.as_level())
        .with_writer(std::io::stderr)
        .init();
}

fn merge_interactive(config: &MergerConfig) {
    let mut dialogs = NativeDialogs::new();
    let mut rng = shuffle_rng(config);

    match app::run(&mut dialogs, config, &mut rng) {
        Ok(outcome) => {
            println!("{}", outcome.message());
        }
        Err(err) => {
            let err = anyhow::Error::new(err);
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() < 2 {
        MergerConfig::default()
    } else {
        match args[1].as_str() {
            "--config" => {
                if args.len() < 3 {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                MergerConfig::load(&args[2])?
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown option: {}", args[1]);
                print_usage();
                std::process::exit(1);
            }
        }
    };

    init_logging(config.log_level);
    merge_interactive(&config);

    Ok(())
}
