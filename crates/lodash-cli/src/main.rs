//! `lodash` CLI — query and reshape JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Read a value by path (stdin → stdout)
//! echo '{"a":{"b":[{"c":42}]}}' | lodash get 'a.b[0].c'
//!
//! # Fall back to a default when the path is missing or null
//! lodash get user.email --default '"none"' -i user.json
//!
//! # Check whether a path exists (null counts as present)
//! lodash has user.email -i user.json
//!
//! # Reshape arrays and objects
//! echo '[1,[2,[3,null]]]' | lodash flatten
//! echo '[1,2,3,4,5]' | lodash chunk 2 --pretty
//! lodash pick name email -i user.json -o picked.json
//! echo '{"x":"on","y":"on","z":"off"}' | lodash invert-by
//! ```
//!
//! Set `RUST_LOG=lodash_core=trace` to see which path characters the parser
//! skipped.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "lodash",
    version,
    about = "Query and reshape JSON documents with lodash-style helpers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Args)]
struct Io {
    /// Input JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the value at a path, e.g. `a.b[0]['c']`
    Get {
        path: String,
        /// JSON value returned when the path is missing or null
        #[arg(long)]
        default: Option<String>,
        #[command(flatten)]
        io: Io,
    },
    /// Print whether every segment of a path resolves
    Has {
        path: String,
        #[command(flatten)]
        io: Io,
    },
    /// Flatten nested arrays, dropping nulls
    Flatten {
        #[command(flatten)]
        io: Io,
    },
    /// Remove null, false, 0 and "" from an array
    Compact {
        #[command(flatten)]
        io: Io,
    },
    /// Split an array into chunks of the given size
    Chunk {
        size: usize,
        #[command(flatten)]
        io: Io,
    },
    /// Keep only the listed keys of an object
    Pick {
        #[arg(required = true)]
        keys: Vec<String>,
        #[command(flatten)]
        io: Io,
    },
    /// Drop the listed keys of an object
    Omit {
        #[arg(required = true)]
        keys: Vec<String>,
        #[command(flatten)]
        io: Io,
    },
    /// List the keys of an object
    Keys {
        #[command(flatten)]
        io: Io,
    },
    /// List the values of an object
    Values {
        #[command(flatten)]
        io: Io,
    },
    /// Swap keys and values of an object (last key wins)
    Invert {
        #[command(flatten)]
        io: Io,
    },
    /// Group the keys of an object by value
    InvertBy {
        #[command(flatten)]
        io: Io,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let pretty = cli.pretty;

    let (result, io) = match cli.command {
        Commands::Get { path, default, io } => {
            let doc = read_document(&io)?;
            let default = match default.as_deref() {
                Some(raw) => serde_json::from_str(raw)
                    .with_context(|| format!("Invalid JSON for --default: {}", raw))?,
                None => Value::Null,
            };
            let value = lodash_core::get(&doc, &path, &default).clone();
            (value, io)
        }
        Commands::Has { path, io } => {
            let doc = read_document(&io)?;
            (Value::Bool(lodash_core::has(&doc, &path)), io)
        }
        Commands::Flatten { io } => {
            let items = expect_array(read_document(&io)?, "flatten")?;
            (Value::Array(lodash_core::flatten_deep(&items)), io)
        }
        Commands::Compact { io } => {
            let items = expect_array(read_document(&io)?, "compact")?;
            (Value::Array(lodash_core::compact(&items)), io)
        }
        Commands::Chunk { size, io } => {
            let items = expect_array(read_document(&io)?, "chunk")?;
            let chunks = lodash_core::chunk(&items, size).context("Failed to chunk array")?;
            (Value::Array(chunks.into_iter().map(Value::Array).collect()), io)
        }
        Commands::Pick { keys, io } => {
            let map = expect_object(read_document(&io)?, "pick")?;
            let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
            (Value::Object(lodash_core::pick(&map, &keys)), io)
        }
        Commands::Omit { keys, io } => {
            let map = expect_object(read_document(&io)?, "omit")?;
            let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
            (Value::Object(lodash_core::omit(&map, &keys)), io)
        }
        Commands::Keys { io } => {
            let doc = read_document(&io)?;
            let keys = lodash_core::keys(&doc).into_iter().map(Value::String).collect();
            (Value::Array(keys), io)
        }
        Commands::Values { io } => {
            let doc = read_document(&io)?;
            (Value::Array(lodash_core::values(&doc)), io)
        }
        Commands::Invert { io } => {
            let map = expect_object(read_document(&io)?, "invert")?;
            (Value::Object(lodash_core::invert(&map)), io)
        }
        Commands::InvertBy { io } => {
            let map = expect_object(read_document(&io)?, "invert-by")?;
            (Value::Object(lodash_core::invert_by(&map)), io)
        }
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    write_output(io.output.as_deref(), &rendered)
}

/// Name of a value's JSON kind, for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expect_array(value: Value, command: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => bail!("`{}` expects a JSON array, got {}", command, kind(&other)),
    }
}

fn expect_object(value: Value, command: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("`{}` expects a JSON object, got {}", command, kind(&other)),
    }
}

fn read_document(io: &Io) -> Result<Value> {
    let raw = read_input(io.input.as_deref())?;
    let doc = serde_json::from_str(&raw).context("Failed to parse input as JSON")?;
    tracing::debug!(bytes = raw.len(), "parsed input document");
    Ok(doc)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
