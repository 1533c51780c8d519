//! Line-oriented editing scripts replayed against an in-memory editor.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use richpad_config::HexColor;
use richpad_core::{
    BlockTag, EditorShell, FormatCommand, MemoryMirror, MemorySurface, MirrorTarget,
};

pub type Editor = EditorShell<MemorySurface, MemoryMirror>;

/// One script instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Type(String),
    Select(usize, usize),
    Command(FormatCommand),
    Wait(u64),
    Undo,
    Redo,
    ToggleCode,
    SetCode(String),
    Clear,
    Show,
}

/// Parses a whole script. Blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns an error naming the first line that fails to parse.
pub fn parse(source: &str) -> Result<Vec<Step>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| parse_line(line).with_context(|| format!("line {}: {line}", i + 1)))
        .collect()
}

/// Replays `steps` against `shell` on a simulated clock starting at `start`.
///
/// `show` writes the mirror value to `out`. The editor is torn down at the
/// end and the final mirror value is returned.
///
/// # Errors
///
/// Returns an error if a command or code edit fails, or `out` cannot be
/// written.
pub fn run<W: Write>(
    steps: Vec<Step>,
    mut shell: Editor,
    start: Instant,
    out: &mut W,
) -> Result<String> {
    let mut now = start;

    for step in steps {
        match step {
            Step::Type(text) => {
                shell.surface_mut().type_text(&text);
                shell.on_input(now);
            }
            Step::Select(start, end) => shell.surface_mut().select(start, end),
            Step::Command(command) => {
                if !shell.execute(command.clone())? {
                    tracing::info!("{command} had nothing to apply to");
                }
            }
            Step::Wait(ms) => {
                now += Duration::from_millis(ms);
                shell.tick(now);
            }
            Step::Undo => {
                if !shell.undo() {
                    tracing::info!("Nothing to undo");
                }
            }
            Step::Redo => {
                if !shell.redo() {
                    tracing::info!("Nothing to redo");
                }
            }
            Step::ToggleCode => {
                shell.toggle_code_view();
            }
            Step::SetCode(html) => shell.set_code(&html)?,
            Step::Clear => shell.clear(),
            Step::Show => writeln!(out, "{}", shell.mirror().value())?,
        }
    }

    let history = shell.history();
    tracing::info!(
        snapshots = history.len(),
        can_undo = history.can_undo(),
        can_redo = history.can_redo(),
        "Script finished"
    );

    let (_surface, mirror) = shell.destroy();
    Ok(mirror.value())
}

fn parse_line(line: &str) -> Result<Step> {
    let line = line.trim_start();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let arg = rest.trim();

    let step = match word {
        // Typed text keeps inner whitespace; only the separator is dropped.
        "type" => Step::Type(rest.to_string()),
        "select" => {
            let (start, end) = two_numbers(arg)?;
            Step::Select(start, end)
        }
        "wait" => Step::Wait(arg.parse().context("expected milliseconds")?),
        "bold" => Step::Command(FormatCommand::Bold),
        "italic" => Step::Command(FormatCommand::Italic),
        "underline" => Step::Command(FormatCommand::Underline),
        "strike" => Step::Command(FormatCommand::StrikeThrough),
        "removeformat" => Step::Command(FormatCommand::RemoveFormat),
        "heading" => Step::Command(FormatCommand::FormatBlock(arg.parse::<BlockTag>()?)),
        "ul" => Step::Command(FormatCommand::InsertUnorderedList),
        "ol" => Step::Command(FormatCommand::InsertOrderedList),
        "link" => Step::Command(FormatCommand::CreateLink(arg.to_string())),
        "image" => Step::Command(FormatCommand::InsertImage(arg.to_string())),
        "color" => Step::Command(FormatCommand::ForeColor(color(arg)?)),
        "highlight" => Step::Command(FormatCommand::BackColor(color(arg)?)),
        "table" => {
            let (rows, cols) = two_numbers(arg)?;
            Step::Command(FormatCommand::InsertTable { rows, cols })
        }
        "undo" => Step::Undo,
        "redo" => Step::Redo,
        "code" if arg.is_empty() => Step::ToggleCode,
        "code" => Step::SetCode(arg.to_string()),
        "clear" => Step::Clear,
        "show" => Step::Show,
        other => bail!("unknown instruction '{other}'"),
    };
    Ok(step)
}

fn two_numbers(arg: &str) -> Result<(usize, usize)> {
    let mut parts = arg.split_whitespace();
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected two numbers");
    };
    Ok((a.parse()?, b.parse()?))
}

fn color(arg: &str) -> Result<HexColor> {
    arg.parse::<HexColor>().map_err(anyhow::Error::msg)
}
