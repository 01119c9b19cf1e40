//! Interactive preview session.
//!
//! Commands are read line by line on a background thread. While a copy
//! confirmation is showing, the loop waits only until its reset deadline so
//! the page redraws without the mark once it expires.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use log::{debug, trace};
use wikidown_core::{DropdownId, FragmentId};
use wikidown_render::{is_tty, Preview, Renderer};

const HELP: &str = "\
commands:
  t, toggle <id>    expand or collapse a dropdown
  c, copy <id>      copy a code fragment
  e, expand         expand every dropdown
  x, collapse       collapse every dropdown
  ls, list          list dropdowns and fragments
  i, ids            show or hide ids
  h, help           this help
  q, quit           leave";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(DropdownId),
    Copy(FragmentId),
    ExpandAll,
    CollapseAll,
    List,
    Ids,
    Help,
    Redraw,
    Quit,
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Command::Redraw);
        };
        let arg = words.next();

        match (verb, arg) {
            ("t" | "toggle", Some(id)) => Ok(Command::Toggle(DropdownId::from(id))),
            ("c" | "copy", Some(id)) => Ok(Command::Copy(FragmentId::from(id))),
            ("t" | "toggle" | "c" | "copy", None) => Err(format!("'{}' needs an id", verb)),
            ("e" | "expand", _) => Ok(Command::ExpandAll),
            ("x" | "collapse", _) => Ok(Command::CollapseAll),
            ("ls" | "list", _) => Ok(Command::List),
            ("i" | "ids", _) => Ok(Command::Ids),
            ("h" | "help" | "?", _) => Ok(Command::Help),
            ("q" | "quit" | "exit", _) => Ok(Command::Quit),
            _ => Err(format!("unknown command '{}', try 'help'", verb)),
        }
    }
}

/// A preview bound to a renderer, driven by commands.
pub struct Session<W: Write> {
    renderer: Renderer<W>,
    preview: Preview,
    clear_screen: bool,
}

impl<W: Write> Session<W> {
    pub fn new(renderer: Renderer<W>, preview: Preview) -> Self {
        Self {
            renderer,
            preview,
            clear_screen: false,
        }
    }

    /// Clear the terminal before each redraw.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    #[cfg(test)]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// Redraw the page followed by a status line.
    pub fn draw(&mut self, status: &str) -> io::Result<()> {
        if self.clear_screen {
            let writer = self.renderer.writer_mut();
            execute!(writer, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.renderer.render(&self.preview)?;
        let writer = self.renderer.writer_mut();
        writeln!(writer)?;
        if !status.is_empty() {
            writeln!(writer, "{}", status)?;
        }
        write!(writer, "> ")?;
        writer.flush()
    }

    /// Apply one command at `now`. Returns false when the session should end.
    pub fn handle(&mut self, command: Command, now: Instant) -> io::Result<bool> {
        debug!("session command {:?}", command);
        let status = match command {
            Command::Quit => return Ok(false),
            Command::Toggle(id) => match self.preview.toggle(&id) {
                Some(true) => format!("expanded {}", id),
                Some(false) => format!("collapsed {}", id),
                None => format!("no dropdown '{}'", id),
            },
            Command::Copy(id) => {
                if self.renderer.copy(&mut self.preview, &id, now)? {
                    format!("copied {}", id)
                } else {
                    format!("no code fragment '{}'", id)
                }
            }
            Command::ExpandAll => {
                self.preview.expand_all();
                "expanded all dropdowns".to_string()
            }
            Command::CollapseAll => {
                self.preview.collapse_all();
                "collapsed all dropdowns".to_string()
            }
            Command::List => self.listing(),
            Command::Ids => {
                let features = self.renderer.features_mut();
                features.show_ids = !features.show_ids;
                String::new()
            }
            Command::Help => HELP.to_string(),
            Command::Redraw => String::new(),
        };
        self.draw(&status)?;
        Ok(true)
    }

    /// Apply an expired copy reset and redraw if it changed anything.
    pub fn tick(&mut self, now: Instant) -> io::Result<()> {
        if self.preview.poll(now) {
            trace!("copy confirmation expired, redrawing");
            self.draw("")?;
        }
        Ok(())
    }

    fn listing(&self) -> String {
        let mut out = vec!["dropdowns:".to_string()];
        for (id, title) in self.preview.tree().dropdowns() {
            let state = if self.preview.is_expanded(id) { "open" } else { "closed" };
            out.push(format!("  {:<16} {:<7} {}", id.as_str(), state, title));
        }
        out.push("fragments:".to_string());
        for fragment in self.preview.tree().fragments() {
            let first_line = fragment.text.lines().next().unwrap_or("");
            out.push(format!(
                "  {:<16} {:<7} {}",
                fragment.id.as_str(),
                fragment.kind().to_string(),
                first_line
            ));
        }
        out.join("\n")
    }

    /// Run until `quit` or the end of input.
    pub fn run(mut self, commands: Receiver<String>) -> io::Result<()> {
        self.draw("type 'help' for commands")?;
        loop {
            let received = match self.preview.pending_reset() {
                Some(ticket) => commands.recv_timeout(ticket.remaining(Instant::now())),
                None => commands.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };
            match received {
                Ok(line) => {
                    let now = Instant::now();
                    self.preview.poll(now);
                    let keep_going = match Command::parse(&line) {
                        Ok(command) => self.handle(command, now)?,
                        Err(message) => {
                            self.draw(&message)?;
                            true
                        }
                    };
                    if !keep_going {
                        return Ok(());
                    }
                }
                Err(RecvTimeoutError::Timeout) => self.tick(Instant::now())?,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }
    }

    #[cfg(test)]
    pub fn into_renderer(self) -> Renderer<W> {
        self.renderer
    }
}

/// Read stdin lines on a background thread.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Start a session on stdout.
pub fn run_interactive(renderer: Renderer<io::Stdout>, preview: Preview) -> io::Result<()> {
    Session::new(renderer, preview)
        .with_clear_screen(is_tty())
        .run(spawn_stdin_reader())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wikidown_ansi::utils::visible;
    use wikidown_config::ComputedStyle;
    use wikidown_render::RenderFeatures;

    const PAGE: &str = "Run ``ls``\n\n{{<More>\nhidden text\n}}";

    fn session() -> Session<Vec<u8>> {
        let features = RenderFeatures {
            highlight: false,
            clipboard: false,
            fixed_width: Some(40),
            margin: 0,
            ..RenderFeatures::default()
        };
        let renderer = Renderer::new(Vec::new(), 40)
            .with_style(ComputedStyle::plain(0))
            .with_features(features);
        Session::new(renderer, Preview::new(PAGE))
    }

    fn take_output(session: Session<Vec<u8>>) -> String {
        visible(&String::from_utf8(session.into_renderer().into_inner()).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("t d2"), Ok(Command::Toggle(DropdownId::from("d2"))));
        assert_eq!(
            Command::parse("copy d2/code-0"),
            Ok(Command::Copy(FragmentId::from("d2/code-0")))
        );
        assert_eq!(Command::parse("  "), Ok(Command::Redraw));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert!(Command::parse("toggle").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }

    #[test]
    fn test_toggle_shows_body() {
        let mut session = session();
        let now = Instant::now();
        assert!(session.handle(Command::Toggle(DropdownId::from("d2")), now).unwrap());
        assert!(session.preview().is_expanded(&DropdownId::from("d2")));
        let output = take_output(session);
        assert!(output.contains("│ hidden text"));
        assert!(output.contains("expanded d2"));
    }

    #[test]
    fn test_copy_then_expire() {
        let mut session = session();
        let now = Instant::now();
        session.handle(Command::Copy(FragmentId::from("inline-0-1")), now).unwrap();
        assert!(session.preview().is_copied(&FragmentId::from("inline-0-1")));

        session.tick(now + Duration::from_millis(500)).unwrap();
        assert!(session.preview().is_copied(&FragmentId::from("inline-0-1")));

        session.tick(now + Duration::from_secs(2)).unwrap();
        assert!(session.preview().copy_state().is_idle());

        let output = take_output(session);
        assert!(output.contains("ls ✓"));
        assert!(output.contains("copied inline-0-1"));
    }

    #[test]
    fn test_unknown_ids_reported() {
        let mut session = session();
        let now = Instant::now();
        session.handle(Command::Toggle(DropdownId::from("d9")), now).unwrap();
        session.handle(Command::Copy(FragmentId::from("code-9")), now).unwrap();
        let output = take_output(session);
        assert!(output.contains("no dropdown 'd9'"));
        assert!(output.contains("no code fragment 'code-9'"));
    }

    #[test]
    fn test_quit_and_listing() {
        let mut session = session();
        let now = Instant::now();
        session.handle(Command::List, now).unwrap();
        assert!(!session.handle(Command::Quit, now).unwrap());
        let output = take_output(session);
        assert!(output.contains("d2"));
        assert!(output.contains("inline-0-1"));
    }

    #[test]
    fn test_run_until_disconnect() {
        let (tx, rx) = mpsc::channel();
        tx.send("e".to_string()).unwrap();
        drop(tx);
        session().run(rx).unwrap();
    }
}
