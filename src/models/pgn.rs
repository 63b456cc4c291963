//! Minimal reader for the tag-pair section of a PGN record.
//!
//! Only headers are needed for opening statistics, so movetext is kept as an
//! opaque string and never validated.

use std::collections::HashMap;

use crate::models::game::{GameResult, Side};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PgnGame {
    headers: HashMap<String, String>,
    pub movetext: String,
}

impl PgnGame {
    /// Returns `None` when the record has neither a readable tag nor movetext.
    /// Tag lines that do not parse are ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let mut game = PgnGame::default();
        let mut lines = text
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .peekable();
        while let Some(line) = lines.next_if(|l| l.starts_with('[')) {
            if let Some((name, value)) = parse_tag(line) {
                game.headers.insert(name, value);
            }
        }
        game.movetext = lines.collect::<Vec<_>>().join("\n").trim().to_string();
        if game.headers.is_empty() && game.movetext.is_empty() {
            return None;
        }
        Some(game)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn result(&self) -> GameResult {
        GameResult::from_opt(self.header("Result"))
    }

    /// Opening name derived from the `ECOUrl` tag: last path segment, hyphens to spaces.
    pub fn opening(&self) -> Option<String> {
        let url = self.header("ECOUrl")?;
        let segment = url.rsplit('/').next().unwrap_or_default();
        let name = segment.replace('-', " ").trim().to_string();
        (!name.is_empty()).then_some(name)
    }

    /// Side played by `external_id`; anyone who is not White is taken to be Black.
    pub fn side_of(&self, external_id: &str) -> Side {
        match self.header("White") {
            Some(white) if white.to_lowercase() == external_id.to_lowercase() => Side::First,
            _ => Side::Second,
        }
    }
}

fn parse_tag(line: &str) -> Option<(String, String)> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    let (name, rest) = inner.split_once(char::is_whitespace)?;
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let quoted = rest.trim().strip_prefix('"')?.strip_suffix('"')?;
    let mut value = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => value.push(chars.next()?),
            '"' => return None,
            _ => value.push(c),
        }
    }
    Some((name.to_string(), value))
}
