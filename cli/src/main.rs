//! `rngstate` - inspect generators and manage saved generator state
//!
//! ```text
//! rngstate list
//! rngstate draw <algorithm> <seed> <count> [--save <path>]
//! rngstate resume <path> <count> [--save <path>]
//! ```

use rngstate_core::{load, registry, restore, save, Generator, RngError};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage:
  rngstate list
  rngstate draw <algorithm> <seed> <count> [--save <path>]
  rngstate resume <path> <count> [--save <path>]";

#[derive(Debug, PartialEq)]
enum Command {
    List,
    Draw {
        algorithm: String,
        seed: u64,
        count: usize,
        save_to: Option<String>,
    },
    Resume {
        path: String,
        count: usize,
        save_to: Option<String>,
    },
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let (positional, save_to) = split_save_flag(args)?;

    match positional.as_slice() {
        ["list"] if save_to.is_none() => Ok(Command::List),
        ["draw", algorithm, seed, count] => Ok(Command::Draw {
            algorithm: algorithm.to_string(),
            seed: seed
                .parse()
                .map_err(|e| format!("seed must be an unsigned integer: {e}"))?,
            count: parse_count(count)?,
            save_to,
        }),
        ["resume", path, count] => Ok(Command::Resume {
            path: path.to_string(),
            count: parse_count(count)?,
            save_to,
        }),
        _ => Err(USAGE.to_string()),
    }
}

fn split_save_flag(args: &[String]) -> Result<(Vec<&str>, Option<String>), String> {
    let mut positional = Vec::new();
    let mut save_to = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--save" {
            let path = iter.next().ok_or("--save needs a path")?;
            save_to = Some(path.clone());
        } else {
            positional.push(arg.as_str());
        }
    }
    Ok((positional, save_to))
}

fn parse_count(raw: &str) -> Result<usize, String> {
    raw.parse()
        .map_err(|e| format!("count must be a non-negative integer: {e}"))
}

fn draw_and_print(rng: &mut Generator, count: usize, save_to: Option<&str>) -> Result<(), RngError> {
    for value in rng.fill_ints(count) {
        println!("{value}");
    }
    if let Some(path) = save_to {
        save(rng, path)?;
    }
    Ok(())
}

fn run(command: Command) -> Result<(), RngError> {
    match command {
        Command::List => {
            for d in registry::list() {
                println!(
                    "{:<16} state={:>5}B min={} max={}",
                    d.name(),
                    d.state_size(),
                    d.min(),
                    d.max()
                );
            }
            Ok(())
        }
        Command::Draw {
            algorithm,
            seed,
            count,
            save_to,
        } => {
            let mut rng = Generator::create(&algorithm, Some(seed))?;
            draw_and_print(&mut rng, count, save_to.as_deref())
        }
        Command::Resume {
            path,
            count,
            save_to,
        } => {
            let state = load(&path)?;
            let mut rng = Generator::create(state.algorithm(), None)?;
            restore(&mut rng, &state)?;
            draw_and_print(&mut rng, count, save_to.as_deref())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}
