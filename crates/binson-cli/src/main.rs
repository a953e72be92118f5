//! `binson` CLI — encode, decode, and inspect Binson data from the command
//! line.
//!
//! The CLI is a thin bridge between JSON and the Binson wire format; all
//! codec logic lives in binson-core. JSON numbers become Binson integers
//! when they fit `i64` and doubles otherwise; JSON `null` has no Binson
//! counterpart and is rejected. On the way back out, Binson bytes values
//! (which JSON cannot express) are rendered as `0x`-prefixed hex strings.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to Binson binary (stdin → stdout)
//! echo '{"a":1}' | binson encode > a.binson
//!
//! # Encode from file to file
//! binson encode -i data.json -o data.binson
//!
//! # Decode Binson back to pretty-printed JSON
//! binson decode -i data.binson
//!
//! # Show encoding statistics
//! binson stats -i data.json
//! ```

use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use binson_core::{Array, Object, Value};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "binson", version, about = "Binson binary serialization CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON to Binson binary
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode Binson binary back to pretty-printed JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show encoding statistics (JSON vs Binson sizes)
    Stats {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, output } => {
            let json = read_input_string(input.as_deref())?;
            let object = object_from_json(&json)?;
            write_output_bytes(output.as_deref(), &object.to_bytes())?;
        }
        Commands::Decode { input, output } => {
            let data = read_input_bytes(input.as_deref())?;
            let object = binson_core::decode(&data).context("Failed to decode Binson input")?;
            let pretty = serde_json::to_string_pretty(&json_from_object(&object))?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Stats { input } => {
            let json = read_input_string(input.as_deref())?;
            let object = object_from_json(&json)?;
            let bytes = object.to_bytes();
            let json_bytes = json.trim().len();
            let ratio = if json_bytes > 0 {
                (1.0 - (bytes.len() as f64 / json_bytes as f64)) * 100.0
            } else {
                0.0
            };
            println!("JSON size:    {} bytes", json_bytes);
            println!("Binson size:  {} bytes", bytes.len());
            println!("Reduction:    {:.1}%", ratio);
        }
    }

    Ok(())
}

/// Parse a JSON document and convert it to a Binson object tree.
fn object_from_json(json: &str) -> Result<Object> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("Failed to parse JSON input")?;
    match value {
        serde_json::Value::Object(map) => object_from_map(map),
        _ => bail!("Binson requires a JSON object at the top level"),
    }
}

fn object_from_map(map: serde_json::Map<String, serde_json::Value>) -> Result<Object> {
    let mut object = Object::new();
    for (name, value) in map {
        object = object.put(name, value_from_json(value)?);
    }
    Ok(object)
}

fn value_from_json(value: serde_json::Value) -> Result<Value> {
    Ok(match value {
        serde_json::Value::Object(map) => Value::Object(object_from_map(map)?),
        serde_json::Value::Array(items) => {
            let mut array = Array::new();
            for item in items {
                array = array.put(value_from_json(item)?);
            }
            Value::Array(array)
        }
        serde_json::Value::String(text) => Value::Text(text),
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Value::Double(f)
            } else {
                bail!("JSON number {n} fits neither a Binson integer nor a double")
            }
        }
        serde_json::Value::Null => bail!("Binson has no null value"),
    })
}

fn json_from_object(object: &Object) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (name, value) in object.iter() {
        map.insert(name.to_owned(), json_from_value(value));
    }
    serde_json::Value::Object(map)
}

fn json_from_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Object(object) => json_from_object(object),
        Value::Array(array) => {
            serde_json::Value::Array(array.iter().map(json_from_value).collect())
        }
        Value::Integer(n) => serde_json::Value::from(*n),
        Value::Text(text) => serde_json::Value::String(text.clone()),
        Value::Bytes(bytes) => serde_json::Value::String(hex_literal(bytes)),
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        // NaN/infinity have no JSON representation; render them as null,
        // like serde_json itself does for non-finite floats.
        Value::Double(d) => serde_json::Number::from_f64(*d)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
    }
}

/// Render opaque bytes as a `0x`-prefixed lowercase hex string.
fn hex_literal(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

fn read_input_string(path: Option<&str>) -> Result<String> {
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

fn read_input_bytes(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
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
            print!("{}", content);
        }
    }
    Ok(())
}

fn write_output_bytes(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            io::stdout()
                .write_all(content)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
