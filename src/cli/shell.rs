use std::io::{self, Write};

use customer_map::{Config, Notification, Session, SortDirection, domain::InvalidDirectionError};
use tracing::instrument;

use super::{
    add_form::{self, FormError},
    details, list,
    prompt::{self, Prompter},
    terminal::{self, Colorize},
};

const HELP: &str = "\
Commands:
  list                       Show customers (alias: ls)
  search <text>              Filter by name, phone, address or page (alias: /<text>)
  clear                      Clear the search
  sort [asc|desc]            Set or toggle the sort direction
  add                        Add a customer, one field at a time
  add <name> | <phone> | <address> | <page>
                             Add a customer in one line
  show <row>                 Show a customer's details
  delete <row>               Delete a customer (alias: rm)
  json                       Print the listed customers as JSON
  help                       Show this help
  quit                       Leave (alias: exit)";

/// Start an interactive customer directory session (default)
#[derive(Debug, Default, clap::Parser)]
pub struct Command {
    /// Start with the list sorted Z-A
    #[arg(long)]
    descending: bool,

    /// Delete without asking for confirmation
    #[arg(long, short)]
    yes: bool,
}

impl Command {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut session = Session::from_config(config);
        if self.descending {
            session.set_sort(SortDirection::Descending);
        }

        let settings = Settings {
            confirm_delete: config.confirm_delete && !self.yes,
            show_created: config.show_created,
            width: terminal::terminal_width(),
        };

        if terminal::is_interactive() {
            let mut out = io::stdout();
            writeln!(out, "{}", "Customer Map".strong())?;
            writeln!(out, "{}", "Type 'help' for commands.".dim())?;
            Shell::new(session, settings, prompt::Terminal, out).run()
        } else {
            let stdin = io::stdin();
            Shell::new(session, settings, prompt::Lines::new(stdin.lock()), io::stdout()).run()
        }
    }
}

/// Presentation settings for a shell.
#[derive(Debug, Clone, Copy)]
struct Settings {
    confirm_delete: bool,
    show_created: bool,
    width: Option<u16>,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Nothing,
    List,
    Search(String),
    ClearSearch,
    Sort(Option<SortDirection>),
    Add(Option<customer_map::Candidate>),
    Show(usize),
    Delete(usize),
    Json,
    Help,
    Quit,
}

/// Errors raised when a command line cannot be understood.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
enum ParseError {
    #[error("Unknown command '{0}'. Type 'help' for commands.")]
    Unknown(String),

    #[error("'{0}' needs a row number, e.g. '{0} 1'")]
    MissingRow(String),

    #[error("Invalid row number '{0}'")]
    InvalidRow(String),

    #[error(transparent)]
    Direction(#[from] InvalidDirectionError),

    #[error(transparent)]
    Form(#[from] FormError),
}

impl Action {
    fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim_start();

        if let Some(text) = line.strip_prefix('/') {
            return Ok(Self::Search(text.to_string()));
        }

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, rest)| (command, rest.trim_start()));
        let rest = rest.trim_end_matches(['\n', '\r']);

        let action = match command.to_ascii_lowercase().as_str() {
            "" => Self::Nothing,
            "list" | "ls" => Self::List,
            "search" if rest.trim().is_empty() => Self::ClearSearch,
            "search" => Self::Search(rest.to_string()),
            "clear" => Self::ClearSearch,
            "sort" if rest.trim().is_empty() => Self::Sort(None),
            "sort" => Self::Sort(Some(rest.parse()?)),
            "add" if rest.trim().is_empty() => Self::Add(None),
            "add" => Self::Add(Some(add_form::parse_inline(rest)?)),
            "show" => Self::Show(parse_row(command, rest)?),
            "delete" | "rm" => Self::Delete(parse_row(command, rest)?),
            "json" => Self::Json,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(ParseError::Unknown(command.to_string())),
        };

        Ok(action)
    }
}

fn parse_row(command: &str, rest: &str) -> Result<usize, ParseError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(ParseError::MissingRow(command.to_string()));
    }
    rest.parse()
        .map_err(|_| ParseError::InvalidRow(rest.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive shell.
///
/// The shell owns the session for its whole lifetime and lends it to the
/// add form, list view and detail view as each command runs.
struct Shell<P, W> {
    session: Session,
    settings: Settings,
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> Shell<P, W> {
    fn new(session: Session, settings: Settings, prompter: P, out: W) -> Self {
        Self {
            session,
            settings,
            prompter,
            out,
        }
    }

    #[instrument(level = "debug", skip_all)]
    fn run(&mut self) -> anyhow::Result<()> {
        while let Some(line) = self.prompter.command()? {
            let action = match Action::parse(&line) {
                Ok(action) => action,
                Err(e) => {
                    writeln!(self.out, "{}", e.to_string().warning())?;
                    continue;
                }
            };

            tracing::debug!("Running {action:?}");
            if self.execute(action)? == Flow::Quit {
                break;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn execute(&mut self, action: Action) -> anyhow::Result<Flow> {
        match action {
            Action::Nothing => {}
            Action::List => self.render_list()?,
            Action::Search(text) => {
                self.session.set_search(text);
                self.render_list()?;
            }
            Action::ClearSearch => {
                self.session.clear_search();
                self.render_list()?;
            }
            Action::Sort(direction) => {
                match direction {
                    Some(direction) => self.session.set_sort(direction),
                    None => {
                        self.session.toggle_sort();
                    }
                }
                self.render_list()?;
            }
            Action::Add(candidate) => {
                let candidate = match candidate {
                    Some(candidate) => candidate,
                    None => add_form::fill(&mut self.prompter)?,
                };
                // A blank name is ignored without comment.
                if let Some(notification) = self.session.submit(&candidate) {
                    self.notify(&notification)?;
                }
            }
            Action::Show(row) => self.show(row)?,
            Action::Delete(row) => self.delete(row)?,
            Action::Json => list::render_json(&self.session, &mut self.out)?,
            Action::Help => writeln!(self.out, "{HELP}")?,
            Action::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn render_list(&mut self) -> anyhow::Result<()> {
        list::render(&self.session, self.settings.width, &mut self.out)
    }

    fn notify(&mut self, notification: &Notification) -> io::Result<()> {
        writeln!(self.out, "{}", format!("✅ {notification}").success())
    }

    fn missing_row(&mut self, row: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            format!("No customer at row {row}. Type 'list' to see row numbers.").warning()
        )
    }

    fn show(&mut self, row: usize) -> anyhow::Result<()> {
        let Some(customer) = self.session.select(row) else {
            return Ok(self.missing_row(row)?);
        };

        details::render(customer, self.settings.show_created, &mut self.out)?;
        Ok(())
    }

    fn delete(&mut self, row: usize) -> anyhow::Result<()> {
        let Some(customer) = self.session.select(row) else {
            return Ok(self.missing_row(row)?);
        };

        let id = customer.id();
        let question = format!("Delete {}?", customer.name());
        details::render(customer, self.settings.show_created, &mut self.out)?;

        if self.settings.confirm_delete && !self.prompter.confirm(&question)? {
            writeln!(self.out, "{}", "Cancelled".dim())?;
            return Ok(());
        }

        if let Some(notification) = self.session.remove(id) {
            self.notify(&notification)?;
        }
        Ok(())
    }
}
