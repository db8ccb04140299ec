use std::fmt;

use crate::registry::{FlagDef, OptionDef, Registry};
use crate::value::Value;

const DEFAULT_WIDTH: usize = 80;
const MIN_TEXT_WIDTH: usize = 10;

/// Usage text for a registry: a "Flags" block and an "Options" block.
///
/// Each row lists `--name` and its aliases, padded to the widest row in the
/// block, followed by the description word-wrapped to the screen width.
/// One-character aliases are shown as `-a`; longer aliases as `--alias`,
/// since `-alias` on the command line is read as a cluster of short flags.
#[derive(Debug, Clone)]
pub struct HelpScreen {
    flags: Vec<Row>,
    options: Vec<Row>,
    width: usize,
}

#[derive(Debug, Clone)]
struct Row {
    names: String,
    help: String,
}

impl HelpScreen {
    pub fn new(registry: &Registry) -> Self {
        Self {
            flags: registry.flags().map(flag_row).collect(),
            options: registry.options().map(option_row).collect(),
            width: DEFAULT_WIDTH,
        }
    }

    /// Wrap descriptions to `width` columns instead of 80.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn render(&self) -> String {
        let blocks: Vec<String> = [("Flags", &self.flags), ("Options", &self.options)]
            .into_iter()
            .filter(|(_, rows)| !rows.is_empty())
            .map(|(title, rows)| format!("{title}\n{}", self.render_block(rows)))
            .collect();
        blocks.join("\n\n")
    }

    fn render_block(&self, rows: &[Row]) -> String {
        let pad = rows
            .iter()
            .map(|r| r.names.chars().count())
            .max()
            .unwrap_or(0);
        let text_width = self
            .width
            .saturating_sub(pad + 4)
            .max(MIN_TEXT_WIDTH);
        let indent = " ".repeat(pad + 4);

        let mut out: Vec<String> = Vec::with_capacity(rows.len());
        for row in rows {
            let lines = wrap(&row.help, text_width);
            let Some((first, rest)) = lines.split_first() else {
                out.push(format!("  {}", row.names));
                continue;
            };
            let mut text = format!("  {:pad$}  {first}", row.names, pad = pad);
            for line in rest {
                text.push('\n');
                text.push_str(&indent);
                text.push_str(line);
            }
            out.push(text);
        }
        out.join("\n")
    }
}

impl fmt::Display for HelpScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn format_names(name: &str, aliases: &[String]) -> String {
    let mut names = vec![format!("--{name}")];
    for alias in aliases {
        if alias.chars().count() == 1 {
            names.push(format!("-{alias}"));
        } else {
            names.push(format!("--{alias}"));
        }
    }
    names.join(", ")
}

fn format_help(description: &str, default: &Value) -> String {
    let mut out = description.trim().to_string();
    if default.is_truthy() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("[default: {default}]"));
    }
    out
}

fn flag_row(flag: &FlagDef) -> Row {
    Row {
        names: format_names(flag.name(), flag.alias_names()),
        help: format_help(flag.help(), &flag.default_value()),
    }
}

fn option_row(option: &OptionDef) -> Row {
    Row {
        names: format_names(option.name(), option.alias_names()),
        help: format_help(option.help(), option.default_value()),
    }
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let word_len = word.chars().count();
            let needed = if line_len == 0 { word_len } else { line_len + 1 + word_len };
            if needed <= width {
                if line_len > 0 {
                    line.push(' ');
                }
                line.push_str(word);
                line_len = needed;
                break;
            }
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
                continue;
            }
            let split = word
                .char_indices()
                .nth(width)
                .map_or(word.len(), |(idx, _)| idx);
            lines.push(word[..split].to_string());
            word = &word[split..];
            if word.is_empty() {
                break;
            }
        }
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}
