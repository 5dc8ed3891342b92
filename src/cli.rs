// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::Params;

const USAGE: &str = "\
Usage: pixelpitch [OUTPUT_DIR]

Scrapes camera listings and writes static pixel pitch comparison pages
(compact.html, dslr.html, dslm.html, index.html, about.html) into
OUTPUT_DIR (default: current directory).";

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_args(env::args().skip(1))?;
    crate::runner::run(&params).map(|_| ())
}

fn parse_args<I>(args: I) -> Result<Params, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::new();
    let mut out_dir: Option<PathBuf> = None;

    // Flags win no matter where they appear, so "pixelpitch out -h" is help
    for a in args {
        match a.as_str() {
            "-h" | "--help" => {
                eprintln!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => {
                return Err(format!("Unknown arg: {}", a).into());
            }
            dir => {
                if out_dir.is_some() {
                    return Err("At most one output directory expected".into());
                }
                out_dir = Some(PathBuf::from(dir));
            }
        }
    }

    if let Some(dir) = out_dir {
        params.out_dir = dir;
    }
    Ok(params)
}
