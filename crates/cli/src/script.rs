//! Command scripts.
//!
//! One command per line; blank lines and `#` comments are ignored.
//!
//! ```text
//! load NAME [PATH]   add an image to the document
//! open NAME          show an image in the editor
//! area image|other   switch the focused area kind
//! add                add the current image to favorites
//! remove INDEX       remove a favorite
//! set INDEX          show a favorite in the editor
//! clean              drop favorites whose image is gone
//! rename OLD NEW     rename an image
//! delete NAME        delete an image
//! list               print the favorites panel
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use faves_host::{Action, ActionError, ActionOutcome, AreaKind, PanelView, Session};
use faves_list::Level;
use tracing::debug;

/// One script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Load { name: String, path: Option<PathBuf> },
	Open(String),
	Area(AreaKind),
	Action(Action),
	Rename { old: String, new: String },
	Delete(String),
	List,
}

/// Parses a whole script into `(line number, command)` pairs.
pub fn parse(input: &str) -> Result<Vec<(usize, Command)>> {
	let mut commands = Vec::new();
	for (idx, line) in input.lines().enumerate() {
		let line_no = idx + 1;
		if let Some(command) = parse_line(line).with_context(|| format!("line {line_no}"))? {
			commands.push((line_no, command));
		}
	}
	Ok(commands)
}

fn parse_line(line: &str) -> Result<Option<Command>> {
	let line = &line[..comment_start(line)];
	let mut words = line.split_whitespace();
	let Some(verb) = words.next() else {
		return Ok(None);
	};
	let args: Vec<&str> = words.collect();

	let command = match (verb, args.as_slice()) {
		("load", [name]) => Command::Load {
			name: (*name).to_owned(),
			path: None,
		},
		("load", [name, path]) => Command::Load {
			name: (*name).to_owned(),
			path: Some(PathBuf::from(*path)),
		},
		("open", [name]) => Command::Open((*name).to_owned()),
		("area", ["image"]) => Command::Area(AreaKind::ImageEditor),
		("area", ["other"]) => Command::Area(AreaKind::Other),
		("add", []) => Command::Action(Action::AddCurrent),
		("remove", [index]) => Command::Action(Action::Remove(parse_index(index)?)),
		("set", [index]) => Command::Action(Action::SetActive(parse_index(index)?)),
		("clean", []) => Command::Action(Action::Clean),
		("rename", [old, new]) => Command::Rename {
			old: (*old).to_owned(),
			new: (*new).to_owned(),
		},
		("delete", [name]) => Command::Delete((*name).to_owned()),
		("list", []) => Command::List,
		(
			"load" | "open" | "area" | "add" | "remove" | "set" | "clean" | "rename" | "delete"
			| "list",
			_,
		) => bail!("wrong arguments for `{verb}`"),
		_ => bail!("unknown command `{verb}`"),
	};
	Ok(Some(command))
}

/// Byte offset of a `#` that starts the line or follows whitespace.
///
/// A `#` inside a word, as in `sky#2.png`, is part of the word.
fn comment_start(line: &str) -> usize {
	line.match_indices('#')
		.map(|(i, _)| i)
		.find(|&i| i == 0 || line[..i].ends_with(char::is_whitespace))
		.unwrap_or(line.len())
}

fn parse_index(word: &str) -> Result<usize> {
	word.parse()
		.map_err(|_| anyhow!("expected a favorite index, got `{word}`"))
}

/// Runs `command` against `session`, writing results to `out`.
pub fn execute(session: &mut Session, command: Command, out: &mut impl Write) -> Result<()> {
	debug!(?command, "executing");
	match command {
		Command::Load { name, path } => {
			let handle = session.load_image(name.as_str(), path)?;
			writeln!(out, "loaded {name} ({handle})")?;
		}
		Command::Open(name) => {
			session.open_image(&name)?;
			writeln!(out, "opened {name}")?;
		}
		Command::Area(kind) => {
			session.editor.area = kind;
			writeln!(out, "area {kind:?}")?;
		}
		Command::Action(action) => match session.run(action) {
			Ok(outcome) => report(session, &outcome, out)?,
			Err(ActionError::Unavailable { action }) => writeln!(out, "unavailable: {action}")?,
			Err(err) => return Err(err.into()),
		},
		Command::Rename { old, new } => {
			session.rename_image(&old, &new)?;
			writeln!(out, "renamed {old} -> {new}")?;
		}
		Command::Delete(name) => {
			session.delete_image(&name)?;
			writeln!(out, "deleted {name}")?;
		}
		Command::List => write!(out, "{}", PanelView::build(session))?,
	}

	for note in session.editor.take_notifications() {
		let level = match note.level {
			Level::Info => "info",
			Level::Warn => "warn",
			Level::Error => "error",
			Level::Success => "ok",
		};
		writeln!(out, "[{level}] {}", note.message)?;
	}
	Ok(())
}

fn report(session: &Session, outcome: &ActionOutcome, out: &mut impl Write) -> Result<()> {
	match outcome {
		ActionOutcome::Added { index, reference } => writeln!(out, "added [{index}] {reference}")?,
		ActionOutcome::Removed(entry) => writeln!(out, "removed {}", entry.reference)?,
		ActionOutcome::Activated(handle) => {
			let name = session.document.images.name_of(*handle).unwrap_or("?");
			writeln!(out, "active {name}")?;
		}
		// The registry already sent a notification for this one.
		ActionOutcome::Unresolved(_) => {}
		ActionOutcome::Cleaned { removed } => writeln!(out, "cleaned {removed}")?,
	}
	Ok(())
}
