// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::{Params, RunMode};
use crate::runner;

pub fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    runner::run(&params)
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-u" | "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                if !(v.starts_with("http://") || v.starts_with("https://")) {
                    return Err(format!("--url must be absolute (http/https): {}", v).into());
                }
                params.event_url = Some(v); }
            "-p" | "--player" => {
                let v: u32 = args.next().ok_or("Missing player id")?.parse()?;
                params.player_id = v; }
            "--data-dir" => params.data_dir = PathBuf::from(args.next().ok_or("Missing data dir")?),
            "--resolve-only" => params.mode = RunMode::ResolveOnly,
            "--check-upcoming" => params.mode = RunMode::CheckUpcoming,
            "--no-notify" => params.notify = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.mode != RunMode::CheckUpcoming && params.event_url.is_none() {
        return Err("Specify --url <tournament page> (or --check-upcoming)".into());
    }
    Ok(())
}
