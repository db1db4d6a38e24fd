use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "json-pretty" => Ok(OutputFormat::JsonPretty),
            _ => Err(format!("Invalid output format: {}. Use 'human', 'json', or 'json-pretty'", s)),
        }
    }
}

/// Writes request bodies to stdout and status messages around them.
///
/// Bodies are always printed; `quiet` only silences the messages.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", "✓".green(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_message("success", msg.as_ref());
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                eprintln!("{}", msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_message("info", msg.as_ref());
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", "⚠".yellow(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_message("warning", msg.as_ref());
            }
        }
    }

    /// Print a request body on stdout
    pub fn body(&self, body: &Value) {
        println!("{}", self.render(body));
    }

    fn render(&self, body: &Value) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string(body).unwrap_or_default(),
            OutputFormat::Human | OutputFormat::JsonPretty => {
                serde_json::to_string_pretty(body).unwrap_or_default()
            }
        }
    }

    // Messages go to stderr so stdout stays a clean body
    fn print_message(&self, kind: &str, msg: &str) {
        let message = json!({
            "type": kind,
            "message": msg
        });
        eprintln!("{}", serde_json::to_string(&message).unwrap_or_default());
    }
}
