mod config;
mod run;
mod terminal;

use std::{io, process};

use crossterm::{cursor::Show, execute, style::ResetColor};

use config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    ctrlc::set_handler(move || {
        let _ = execute!(io::stdout(), ResetColor, Show);
        println!("\r\nInterrupted.");
        process::exit(0);
    })
    .expect("error setting Ctrl-C handler");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    };

    if let Err(e) = run::run(&config) {
        let _ = execute!(io::stdout(), ResetColor, Show);
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}
