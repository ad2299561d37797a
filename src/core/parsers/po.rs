use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::core::CatalogEntry;

/// Read and parse a gettext catalog.
pub fn parse_po_file(path: &Path) -> Result<Vec<CatalogEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read PO file: {:?}", path))?;

    parse_po(&content).with_context(|| format!("Failed to parse PO file: {:?}", path))
}

/// Parse gettext catalog source into entries, in file order.
///
/// Obsolete entries (`#~`) are returned with `obsolete` set. Other comment
/// lines, including `#|` previous values, are skipped. A leading byte order
/// mark is ignored.
pub fn parse_po(content: &str) -> Result<Vec<CatalogEntry>> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    let mut parser = PoParser::default();

    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        parser
            .line(raw_line)
            .with_context(|| format!("line {}: {}", line_number, raw_line.trim()))?;
    }

    parser.finish()
}

/// Field the next continuation string is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Msgctxt,
    Msgid,
    MsgidPlural,
    Msgstr(usize),
}

#[derive(Debug, Default)]
struct PoParser {
    entries: Vec<CatalogEntry>,
    current: Option<PendingEntry>,
    field: Option<Field>,
}

#[derive(Debug, Default)]
struct PendingEntry {
    entry: CatalogEntry,
    has_msgid: bool,
    has_msgstr: bool,
}

impl PoParser {
    fn line(&mut self, raw_line: &str) -> Result<()> {
        let line = raw_line.trim();

        if line.is_empty() {
            self.field = None;
            return Ok(());
        }

        let (line, obsolete) = match line.strip_prefix("#~") {
            // `#~|` is the previous value of an obsolete entry
            Some(rest) if rest.starts_with('|') => return Ok(()),
            Some(rest) => (rest.trim_start(), true),
            None if line.starts_with('#') => {
                self.field = None;
                return Ok(());
            }
            None => (line, false),
        };

        if line.starts_with('"') {
            return self.continuation(line);
        }

        let (keyword, rest) = line
            .split_once(|c: char| c.is_whitespace())
            .map(|(keyword, rest)| (keyword, rest.trim_start()))
            .unwrap_or((line, ""));
        let value = parse_quoted(rest)?;

        match keyword {
            "msgctxt" => {
                self.start_entry(obsolete)?;
                self.pending_mut()?.entry.msgctxt = Some(value);
                self.field = Some(Field::Msgctxt);
            }
            "msgid" => {
                let starts_new = match &self.current {
                    Some(pending) => pending.has_msgid,
                    None => true,
                };
                if starts_new {
                    self.start_entry(obsolete)?;
                }
                let pending = self.pending_mut()?;
                pending.entry.msgid = value;
                pending.entry.obsolete = obsolete;
                pending.has_msgid = true;
                self.field = Some(Field::Msgid);
            }
            "msgid_plural" => {
                let pending = self.pending_with_msgid(keyword)?;
                pending.entry.msgid_plural = Some(value);
                self.field = Some(Field::MsgidPlural);
            }
            "msgstr" => {
                let pending = self.pending_with_msgid(keyword)?;
                pending.entry.msgstr = vec![value];
                pending.has_msgstr = true;
                self.field = Some(Field::Msgstr(0));
            }
            _ => {
                let Some(index) = plural_index(keyword)? else {
                    bail!("unknown keyword '{}'", keyword);
                };
                let pending = self.pending_with_msgid(keyword)?;
                if pending.entry.msgid_plural.is_none() {
                    bail!("{} without msgid_plural", keyword);
                }
                // Plural forms must be numbered 0, 1, 2, ... without gaps.
                let expected = pending.entry.msgstr.len();
                if index != expected {
                    bail!("{} out of order, expected msgstr[{}]", keyword, expected);
                }
                pending.entry.msgstr.push(value);
                pending.has_msgstr = true;
                self.field = Some(Field::Msgstr(index));
            }
        }

        Ok(())
    }

    fn continuation(&mut self, line: &str) -> Result<()> {
        let value = parse_quoted(line)?;
        let Some(field) = self.field else {
            bail!("string continuation without a preceding keyword");
        };
        let entry = &mut self.pending_mut()?.entry;

        let target = match field {
            Field::Msgctxt => entry.msgctxt.get_or_insert_with(String::new),
            Field::Msgid => &mut entry.msgid,
            Field::MsgidPlural => entry.msgid_plural.get_or_insert_with(String::new),
            Field::Msgstr(index) => &mut entry.msgstr[index],
        };
        target.push_str(&value);

        Ok(())
    }

    /// Close the current entry, if any, and open a fresh one.
    fn start_entry(&mut self, obsolete: bool) -> Result<()> {
        self.flush()?;
        self.current = Some(PendingEntry {
            entry: CatalogEntry {
                obsolete,
                ..CatalogEntry::default()
            },
            ..PendingEntry::default()
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(pending) = self.current.take() {
            if !pending.has_msgid {
                bail!("msgctxt without msgid");
            }
            if !pending.has_msgstr {
                bail!("msgid \"{}\" has no msgstr", pending.entry.msgid);
            }
            self.entries.push(pending.entry);
        }
        self.field = None;
        Ok(())
    }

    fn pending_mut(&mut self) -> Result<&mut PendingEntry> {
        match self.current.as_mut() {
            Some(pending) => Ok(pending),
            None => bail!("string continuation without a preceding keyword"),
        }
    }

    fn pending_with_msgid(&mut self, keyword: &str) -> Result<&mut PendingEntry> {
        match self.current.as_mut() {
            Some(pending) if pending.has_msgid => Ok(pending),
            _ => bail!("{} without msgid", keyword),
        }
    }

    fn finish(mut self) -> Result<Vec<CatalogEntry>> {
        self.flush().context("unexpected end of file")?;
        Ok(self.entries)
    }
}

/// `msgstr[N]` -> `Some(N)`; any other keyword -> `None`.
fn plural_index(keyword: &str) -> Result<Option<usize>> {
    let digits = keyword
        .strip_prefix("msgstr[")
        .and_then(|rest| rest.strip_suffix(']'));

    match digits {
        Some(digits) => match digits.parse() {
            Ok(index) => Ok(Some(index)),
            Err(_) => bail!("invalid plural index in '{}'", keyword),
        },
        None => Ok(None),
    }
}

/// Decode one double-quoted PO string. Nothing but whitespace may follow it.
fn parse_quoted(input: &str) -> Result<String> {
    let Some(body) = input.strip_prefix('"') else {
        bail!("expected a quoted string");
    };

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                let trailing = chars.as_str().trim();
                if !trailing.is_empty() {
                    bail!("unexpected text after string: {}", trailing);
                }
                return Ok(value);
            }
            '\\' => match chars.next() {
                Some(escaped) => value.push(unescape(escaped)),
                None => break,
            },
            other => value.push(other),
        }
    }

    bail!("unterminated string")
}

fn unescape(escaped: char) -> char {
    match escaped {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'v' => '\u{0B}',
        other => other,
    }
}
