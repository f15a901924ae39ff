use std::error::Error;
use std::fs;
use std::io::{self, Read};

use clap::Parser;
use combinator_json::constants::MAX_DEPTH;
use combinator_json::{ParseOptions, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cjson", version, about = "Parse JSON into a syntax tree or native values")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Print the converted native value instead of the syntax tree.
    #[arg(long)]
    value: bool,

    /// Only check that the document parses.
    #[arg(long, conflicts_with = "value")]
    check: bool,

    /// Deepest array/object nesting accepted (default: 256).
    #[arg(long = "max-depth", value_name = "number", default_value_t = MAX_DEPTH)]
    max_depth: usize,

    /// Accept any nesting depth.
    #[arg(long = "no-depth-limit", conflicts_with = "max_depth")]
    no_depth_limit: bool,
}

#[derive(Debug)]
enum InputSource {
    Stdin,
    File(String),
}

impl InputSource {
    fn label(&self) -> &str {
        match self {
            InputSource::Stdin => "stdin",
            InputSource::File(path) => path,
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let (input_text, input_source) = read_input(args.input.as_deref())?;
    debug!(source = input_source.label(), len = input_text.len(), "read input");

    let max_depth = if args.no_depth_limit {
        None
    } else {
        Some(args.max_depth)
    };
    let options = ParseOptions::new().with_max_depth(max_depth);
    let node = combinator_json::parse_str_with_options(&input_text, &options)?;

    if args.check {
        println!("✔ {} is valid JSON", input_source.label());
    } else if args.value {
        println!("{}", Value::from(node));
    } else {
        println!("{node}");
    }
    Ok(())
}

fn read_input(input: Option<&str>) -> Result<(String, InputSource), Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok((buf, InputSource::Stdin))
        }
        Some(path) => {
            let buf = fs::read_to_string(path)?;
            Ok((buf, InputSource::File(path.to_string())))
        }
    }
}
