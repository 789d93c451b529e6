//! Float collection math runner
//!
//! Reads one invocation request as JSON from a file (or stdin when no file,
//! or `-`, is given) and prints the output JSON.
//!
//! ```text
//! $ echo '{"operation": "MULTIPLY", "a": [1, 2, 3], "b": 2}' | float-collection-math
//! {"collection":[2.0,4.0,6.0]}
//! ```

use std::io::Read;
use std::path::Path;

use float_collection_math::{invoke_json, Result};
use log::{error, info};

fn read_input(path: Option<&str>) -> Result<String> {
    let mut input = String::new();
    match path {
        Some(path) if path != "-" => {
            info!("Reading invocation from {}", Path::new(path).display());
            input = std::fs::read_to_string(path)?;
        }
        _ => {
            info!("Reading invocation from stdin");
            std::io::stdin().read_to_string(&mut input)?;
        }
    }
    Ok(input)
}

fn run() -> Result<String> {
    let path = std::env::args().nth(1);
    let input = read_input(path.as_deref())?;
    invoke_json(&input)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(output) => println!("{}", output),
        Err(err) => {
            error!("Invocation failed: {}", err);
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
