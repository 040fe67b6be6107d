use anyhow::{Context, Result};
use dialoguer::{Input, Select};
use std::io::{self, BufRead, Write};

/// Outcome of a choice prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Picked(usize),
    /// The picker was dismissed (Esc or `q`); the session goes on.
    Cancelled,
    /// The input is closed.
    Closed,
}

/// Source of raw answers for the shell.
///
/// `None` from `text` means the input stream is closed, as at the end of a
/// pipe. On a terminal Ctrl-C raises SIGINT and ends the process without
/// going through the shell.
pub trait Prompter {
    fn text(&mut self, prompt: &str) -> Result<Option<String>>;

    fn choice(&mut self, prompt: &str, choices: &[&str]) -> Result<Selection>;
}

/// Interactive prompts on a terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(e)) if is_closed(&e) => Ok(None),
            Err(e) => Err(e).context("Failed to read input"),
        }
    }

    fn choice(&mut self, prompt: &str, choices: &[&str]) -> Result<Selection> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(choices)
            .default(0)
            .interact_opt();

        match selection {
            Ok(Some(idx)) => Ok(Selection::Picked(idx)),
            Ok(None) => Ok(Selection::Cancelled),
            Err(dialoguer::Error::IO(e)) if is_closed(&e) => Ok(Selection::Closed),
            Err(e) => Err(e).context("Failed to show selection dialog"),
        }
    }
}

fn is_closed(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::UnexpectedEof
}

/// Line-oriented prompts for piped input.
///
/// Each prompt is written as `? <prompt>: ` and answered by one line.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompts go to stderr, like the terminal prompts, so stdout stays parseable.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "? {}: ", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to write prompt")?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(&mut self, prompt: &str) -> Result<Option<String>> {
        self.ask(prompt)
    }

    fn choice(&mut self, prompt: &str, choices: &[&str]) -> Result<Selection> {
        let labelled = format!("{} ({})", prompt, choices.join("/"));
        loop {
            let Some(answer) = self.ask(&labelled)? else {
                return Ok(Selection::Closed);
            };
            if let Some(idx) = match_choice(answer.trim(), choices) {
                return Ok(Selection::Picked(idx));
            }
            writeln!(self.output, "Please answer one of: {}", choices.join(", "))
                .context("Failed to write prompt")?;
        }
    }
}

/// Accepts a choice label or its 1-based position.
fn match_choice(answer: &str, choices: &[&str]) -> Option<usize> {
    if let Some(idx) = choices.iter().position(|c| *c == answer) {
        return Some(idx);
    }
    match answer.parse::<usize>() {
        Ok(n) if (1..=choices.len()).contains(&n) => Some(n - 1),
        _ => None,
    }
}
