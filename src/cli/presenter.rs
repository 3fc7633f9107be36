//! CLI presenter for output formatting

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use colored::*;
use serde_json::{json, Value};

use crate::application::ports::{ClipboardChangedEvent, EventSink};
use crate::domain::clipboard::CapturedPayload;
use crate::domain::config::OutputFormat;

/// Presenter for CLI output formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (event lines, config values)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print monitor status
    pub fn monitor_status(&self, state: &str) {
        eprintln!("{} Monitor: {}", "●".cyan(), state);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Render one event as a single line
    pub fn format_event(&self, event: &ClipboardChangedEvent, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format_event_text(event),
            OutputFormat::Json => event_json(event).to_string(),
        }
    }

    fn format_event_text(&self, event: &ClipboardChangedEvent) -> String {
        let source = &event.source;
        let mut line = format!(
            "{} {} {} {}",
            format!("[{}]", event.content_type).cyan().bold(),
            event.payload.summary().replace(['\r', '\n'], " "),
            "←".dimmed(),
            source.label().yellow()
        );
        if source.process_id != 0 {
            line.push_str(&format!(" (pid {})", source.process_id));
        }
        if !source.window_title.is_empty() {
            line.push_str(&format!(" \"{}\"", source.window_title));
        }
        line
    }
}

/// JSON form of an event; images are embedded as base64 PNG
pub fn event_json(event: &ClipboardChangedEvent) -> Value {
    let payload = match &event.payload {
        CapturedPayload::Files(files) => json!({
            "files": files.paths(),
            "primary": files.primary(),
        }),
        CapturedPayload::Text(text) => json!({ "text": text }),
        CapturedPayload::Image(image) => {
            let png = match image.to_png() {
                Ok(bytes) => Value::String(BASE64.encode(bytes)),
                Err(e) => {
                    log::warn!("Failed to encode clipboard image as PNG: {}", e);
                    Value::Null
                }
            };
            json!({
                "width": image.width(),
                "height": image.height(),
                "png_base64": png,
            })
        }
    };

    json!({
        "content_type": event.content_type,
        "payload": payload,
        "source": event.source,
    })
}

/// Event sink that prints every event to stdout
pub struct EventPrinter {
    presenter: Presenter,
    format: OutputFormat,
}

impl EventPrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            presenter: Presenter::new(),
            format,
        }
    }
}

impl EventSink for EventPrinter {
    fn publish(&mut self, event: &ClipboardChangedEvent) {
        let line = self.presenter.format_event(event, self.format);
        self.presenter.output(&line);
    }
}
