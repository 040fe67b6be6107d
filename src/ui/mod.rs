use colored::*;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
    Debug,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Error => "error",
            Level::Debug => "debug",
        }
    }

    /// Status icon shown in front of text-mode messages
    pub fn icon(self) -> NerdFont {
        match self {
            Level::Info => NerdFont::Info,
            Level::Success => NerdFont::Check,
            Level::Error => NerdFont::Cross,
            Level::Debug => NerdFont::Bug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

static RENDERER: LazyLock<RwLock<Renderer>> = LazyLock::new(|| RwLock::new(Renderer::default()));

// Global debug state
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_debug_enabled() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

pub fn init(format: OutputFormat, color: bool) {
    if let Ok(mut r) = RENDERER.write() {
        r.format = format;
        r.color = color;
    }
    if !color {
        colored::control::set_override(false);
    }
}

pub mod nerd_font;
pub use nerd_font::NerdFont;

pub const SEPARATOR: &str = "━";

#[derive(Serialize)]
struct Event<'a> {
    level: &'a str,
    code: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

fn colorize(level: Level, s: &str, enable: bool) -> String {
    if !enable {
        return s.to_string();
    }
    match level {
        Level::Info => s.blue().to_string(),
        Level::Success => s.green().bold().to_string(),
        Level::Error => s.red().bold().to_string(),
        Level::Debug => s.cyan().to_string(),
    }
}

/// Text-mode line for a message: status icon followed by the colored message.
pub fn format_text(level: Level, message: &str, color: bool) -> String {
    colorize(
        level,
        &format!("{} {}", char::from(level.icon()), message),
        color,
    )
}

fn strip_ansi(input: &str) -> String {
    // Remove CSI escape sequences like \x1b[0m and \x1b[1;32m
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Final byte of a CSI sequence is in @ A-Z [ \ ] ^ _ ` a-z { | } ~
            for b in chars.by_ref() {
                if ('@'..='~').contains(&b) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// JSON-lines rendering of an event, with ANSI sequences removed from the message.
pub fn format_json(
    level: Level,
    code: &str,
    message: &str,
    data: Option<serde_json::Value>,
) -> serde_json::Result<String> {
    let clean_msg = strip_ansi(message);
    let ev = Event {
        level: level.as_str(),
        code,
        message: &clean_msg,
        data,
    };
    serde_json::to_string(&ev)
}

pub fn emit(level: Level, code: &str, message: &str, data: Option<serde_json::Value>) {
    if level == Level::Debug && !is_debug_enabled() {
        return;
    }
    let r = RENDERER.read().expect("renderer poisoned").clone();
    let mut out: Box<dyn Write> = match level {
        Level::Error | Level::Debug => Box::new(io::stderr()),
        _ => Box::new(io::stdout()),
    };
    match r.format {
        OutputFormat::Text => {
            let _ = writeln!(out, "{}", format_text(level, message, r.color));
        }
        OutputFormat::Json => {
            let s = format_json(level, code, message, data).expect("serialize event");
            let _ = writeln!(out, "{}", s);
        }
    }
}

/// Print free-form text (banners, tables). Suppressed in JSON mode.
pub fn plain(text: &str) {
    if matches!(get_output_format(), OutputFormat::Json) {
        return;
    }
    let _ = writeln!(io::stdout(), "{}", text);
}

// Helper to get current output format
pub fn get_output_format() -> OutputFormat {
    RENDERER.read().expect("renderer poisoned").format
}

pub fn separator() {
    let r = RENDERER.read().expect("renderer poisoned").clone();
    // In JSON mode, do not print separators to avoid breaking jq parsing
    if matches!(r.format, OutputFormat::Json) {
        return;
    }
    let _ = writeln!(io::stdout(), "{}", separator_line(r.color));
}

fn separator_line(color: bool) -> String {
    let line = SEPARATOR.repeat(40);
    if color {
        line.bright_black().to_string()
    } else {
        line
    }
}

pub mod prelude {
    pub use super::{Level, OutputFormat, emit, get_output_format, plain, separator};
}
