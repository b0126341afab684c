//! Output formatting for telelink-cli (table, json)

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ASCII table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Context for output rendering
pub struct OutputContext {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl OutputContext {
    pub fn new(format: OutputFormat, no_color: bool, quiet: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { format, quiet }
    }

    /// Print a success message (unless in quiet mode)
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.green());
        }
    }

    /// Print an info message (unless in quiet mode)
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }

    /// Print an error message
    pub fn error(&self, msg: &str) {
        eprintln!("{}", msg.red());
    }

    /// Print rows in the configured format
    pub fn print<T: Tabled + Serialize>(&self, data: &[T]) {
        match self.format {
            OutputFormat::Table => {
                if data.is_empty() {
                    if !self.quiet {
                        println!("No data");
                    }
                } else {
                    println!("{}", Table::new(data));
                }
            }
            OutputFormat::Json => println!("{}", to_json(data)),
        }
    }

    /// Print one free-form record returned by the server
    pub fn print_record(&self, record: &Map<String, Value>) {
        match self.format {
            OutputFormat::Table => {
                let pairs = flatten(record);
                if pairs.is_empty() && !self.quiet {
                    println!("No data");
                }
                for (key, value) in pairs {
                    println!("{}: {}", key.bold(), value);
                }
            }
            OutputFormat::Json => println!("{}", to_json(record)),
        }
    }
}

/// Pretty JSON rendering used by the json output format
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "null".to_string())
}

/// Flatten nested objects into dotted key/value pairs.
///
/// Arrays and scalars are rendered as compact JSON; strings without quotes.
pub fn flatten(record: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    flatten_into(&mut pairs, None, record);
    pairs
}

fn flatten_into(pairs: &mut Vec<(String, String)>, prefix: Option<&str>, map: &Map<String, Value>) {
    for (key, value) in map {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match value {
            Value::Object(inner) if !inner.is_empty() => flatten_into(pairs, Some(&path), inner),
            Value::String(s) => pairs.push((path, s.clone())),
            Value::Null => pairs.push((path, "-".to_string())),
            other => pairs.push((path, other.to_string())),
        }
    }
}

// =============================================================================
// Display types for various commands
// =============================================================================

/// Vehicle display for list command
#[derive(Debug, Tabled, Serialize)]
pub struct VehicleRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "VIN")]
    pub vin: String,
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Nickname")]
    pub nickname: String,
}

/// Operation display for operations command
#[derive(Debug, Tabled, Serialize)]
pub struct OperationRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Vehicle")]
    pub requires_vehicle: String,
}

/// Credential field display for schema command
#[derive(Debug, Tabled, Serialize)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub name: String,
    #[tabled(rename = "Label")]
    pub display_name: String,
    #[tabled(rename = "Kind")]
    pub kind: String,
    #[tabled(rename = "Required")]
    pub required: String,
    #[tabled(rename = "Default")]
    pub default: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flatten_nested_record() {
        let record = json!({
            "doorLock": true,
            "evStatus": {"batteryStatus": 78, "charging": {"plugged": false}},
            "name": "Daily",
            "note": null,
            "tires": [1, 2],
            "empty": {}
        });
        let Value::Object(record) = record else {
            unreachable!()
        };

        let mut pairs = flatten(&record);
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("doorLock".to_string(), "true".to_string()),
                ("empty".to_string(), "{}".to_string()),
                ("evStatus.batteryStatus".to_string(), "78".to_string()),
                ("evStatus.charging.plugged".to_string(), "false".to_string()),
                ("name".to_string(), "Daily".to_string()),
                ("note".to_string(), "-".to_string()),
                ("tires".to_string(), "[1,2]".to_string()),
            ]
        );
    }
}
