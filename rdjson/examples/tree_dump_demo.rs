// SPDX-License-Identifier: Apache-2.0

// Parses a JSON document and prints its tree, one node per line.
// Pass a document as the first argument or use the built-in sample.
// Set RUST_LOG=trace to see the parser's own log output.

use rdjson::{JsonType, ParseError, Value};

fn dump(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value.json_type() {
        JsonType::Null | JsonType::False | JsonType::True => {
            println!("{pad}{}", value.json_type())
        }
        JsonType::Number => println!("{pad}number {}", value.number()),
        JsonType::String => {
            println!("{pad}string {:?}", String::from_utf8_lossy(value.string()))
        }
        JsonType::Array => {
            println!("{pad}array ({} elements)", value.array_size());
            for i in 0..value.array_size() {
                dump(value.array_element(i), indent + 1);
            }
        }
        JsonType::Object => {
            println!("{pad}object ({} members)", value.object_size());
            for i in 0..value.object_size() {
                println!(
                    "{pad}  key {:?}",
                    String::from_utf8_lossy(value.object_key(i))
                );
                dump(value.object_value(i), indent + 2);
            }
        }
    }
}

fn main() -> Result<(), ParseError> {
    env_logger::init();

    let json = std::env::args().nth(1).unwrap_or_else(|| {
        r#"{"name": "value", "number": 42, "flag": true, "list": [1.5, null, "\u00e9"]}"#
            .to_string()
    });
    println!("Input: {json}");

    let value: Value = json.parse()?;
    dump(&value, 0);
    Ok(())
}
