//! A line-based stand-in for a grid of radical buttons.
//!
//! Radicals are listed by number, grouped by stroke count. Entering numbers toggles the
//! radicals, `c` clears the selection, `l` lists the radicals again and `q` quits.
//! The matching kanji and a status line are printed after every command.

use multirad::{QueryEngine, QueryResult, RadicalId};
use radkdata::radkfile;
use std::io::{self, BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Toggle(Vec<RadicalId>),
    Clear,
    List,
    Quit,
    Invalid(String),
}

pub fn run<R: BufRead, W: Write>(
    engine: &mut QueryEngine<'_>,
    columns: usize,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    write_radicals(engine, columns, out)?;
    write_result(&engine.compute(), out)?;

    for line in input.lines() {
        match parse_command(&line?) {
            Command::Toggle(ids) => {
                for id in ids {
                    if engine.toggle(id).is_none() {
                        writeln!(out, "no radical numbered {}", id.0 + 1)?;
                    }
                }
            }
            Command::Clear => engine.clear(),
            Command::List => write_radicals(engine, columns, out)?,
            Command::Quit => break,
            Command::Invalid(token) => writeln!(out, "unknown command '{token}'")?,
        }
        write_result(&engine.compute(), out)?;
        out.flush()?;
    }
    Ok(())
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "q" | "quit" => Command::Quit,
        "c" | "clear" => Command::Clear,
        "l" | "list" => Command::List,
        numbers => {
            let mut ids = vec![];
            for token in numbers.split_whitespace() {
                match token.parse::<usize>() {
                    Ok(number) if number > 0 => ids.push(RadicalId(number - 1)),
                    _ => return Command::Invalid(token.to_string()),
                }
            }
            Command::Toggle(ids)
        }
    }
}

// selected radicals are marked with * instead of :
fn write_radicals<W: Write>(
    engine: &QueryEngine<'_>,
    columns: usize,
    out: &mut W,
) -> io::Result<()> {
    let mut id = 0;
    for (strokes, group) in radkfile::stroke_groups(engine.radicals()) {
        writeln!(out, "[{strokes}]")?;
        for row in group.chunks(columns.max(1)) {
            let mut cells = vec![];
            for radical in row {
                let marker = if engine.is_active(RadicalId(id)) { '*' } else { ':' };
                cells.push(format!("{}{marker}{}", id + 1, radical.glyph));
                id += 1;
            }
            writeln!(out, "  {}", cells.join(" "))?;
        }
    }
    Ok(())
}

fn write_result<W: Write>(result: &QueryResult, out: &mut W) -> io::Result<()> {
    if !result.kanji.is_empty() {
        writeln!(out, "{result}")?;
    }
    writeln!(out, "{}", result.status())
}
