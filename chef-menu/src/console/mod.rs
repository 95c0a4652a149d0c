//! Line-oriented console front end
//!
//! Reads one command per line, runs it against [`AppState`] and writes the
//! result. Application errors (validation, unknown id, not logged in) are
//! printed and the console keeps going.

pub mod command;
pub mod render;

use crate::core::AppState;
use crate::services::FilterDraft;
use command::{Command, FilterCommand, ParseLineError, parse_line};
use menu_shared::AppResult;
use std::io::{self, BufRead, Write};

/// Whether the console should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console {
    state: AppState,
    /// Pending filter changes, applied with `filter apply`
    draft: Option<FilterDraft>,
}

impl Console {
    pub fn new(state: AppState) -> Self {
        Self { state, draft: None }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        render::welcome(out)?;
        for line in input.lines() {
            if self.execute_line(&line?, out)? == Flow::Quit {
                break;
            }
        }
        tracing::info!("Console closed");
        Ok(())
    }

    /// Parse and run a single line
    pub fn execute_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let command = match parse_line(line) {
            Ok(Some(parsed)) => parsed.command,
            Ok(None) => return Ok(Flow::Continue),
            Err(ParseLineError::Clap(e)) => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                return Ok(Flow::Continue);
            }
        };

        if matches!(command, Command::Quit) {
            return Ok(Flow::Quit);
        }
        if let Err(e) = self.execute(command, out)? {
            tracing::debug!(code = %e.code, message = %e.message, "Command rejected");
            writeln!(out, "{}", e.message)?;
        }
        Ok(Flow::Continue)
    }

    /// I/O errors are the outer result; application errors the inner one
    fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<AppResult<()>> {
        let currency = self.state.config().currency.clone();
        match command {
            Command::Login { username } => {
                let username = username.join(" ");
                if let Err(e) = self.state.login(&username) {
                    return Ok(Err(e));
                }
                let summary = match self.state.home_summary() {
                    Ok(summary) => summary,
                    Err(e) => return Ok(Err(e)),
                };
                render::home(out, &summary, &currency)?;
            }
            Command::Home => match self.state.home_summary() {
                Ok(summary) => render::home(out, &summary, &currency)?,
                Err(e) => return Ok(Err(e)),
            },
            Command::Averages => {
                render::averages(out, &self.state.average_prices(), &currency)?;
            }
            Command::Courses => {
                let filter = self.state.filter();
                render::courses(out, filter.courses(), |c| filter.is_selected(c))?;
            }
            Command::Filter(cmd) => self.execute_filter(cmd, out)?,
            Command::List => {
                if let Err(e) = self.state.session().require_user() {
                    return Ok(Err(e));
                }
                render::management(out, &self.state.store().list(), &currency)?;
            }
            Command::Add(args) => {
                let mut form = self.state.new_item_form();
                args.apply_to(&mut form);
                match self.state.create_item(&form) {
                    Ok(item) => writeln!(out, "Added #{} {}", item.id, item.name)?,
                    Err(e) => return Ok(Err(e)),
                }
            }
            Command::Edit { id, form: args } => {
                let result = self.state.edit_form(id).and_then(|mut form| {
                    args.apply_to(&mut form);
                    self.state.update_item(id, &form)
                });
                match result {
                    Ok(item) => writeln!(out, "Updated #{} {}", item.id, item.name)?,
                    Err(e) => return Ok(Err(e)),
                }
            }
            Command::Delete { id, yes } => {
                if !yes {
                    writeln!(
                        out,
                        "Are you sure you want to delete this menu item? Run `delete {id} --yes` to confirm."
                    )?;
                } else {
                    match self.state.delete_item(id) {
                        Ok(item) => writeln!(out, "Deleted #{} {}", item.id, item.name)?,
                        Err(e) => return Ok(Err(e)),
                    }
                }
            }
            Command::Quit => {}
        }
        Ok(Ok(()))
    }

    fn execute_filter(&mut self, cmd: FilterCommand, out: &mut impl Write) -> io::Result<()> {
        match cmd {
            FilterCommand::Toggle { course } => {
                let draft = self.draft.get_or_insert_with(|| self.state.filter_draft());
                draft.toggle(&course);
                self.render_draft(out)?;
            }
            FilterCommand::Clear => {
                self.draft
                    .get_or_insert_with(|| self.state.filter_draft())
                    .clear();
                self.render_draft(out)?;
            }
            FilterCommand::Show => self.render_draft(out)?,
            FilterCommand::Apply => {
                if let Some(draft) = self.draft.take() {
                    self.state.apply_filter(draft);
                }
                writeln!(
                    out,
                    "Filter applied: {} of {} courses selected",
                    self.state.filter().selected().len(),
                    self.state.filter().courses().len()
                )?;
            }
            FilterCommand::Cancel => {
                self.draft = None;
                writeln!(out, "Filter changes discarded")?;
            }
        }
        Ok(())
    }

    fn render_draft(&self, out: &mut impl Write) -> io::Result<()> {
        let draft = self
            .draft
            .clone()
            .unwrap_or_else(|| self.state.filter_draft());
        render::courses(out, self.state.filter().courses(), |c| draft.is_selected(c))?;
        // toggled-in courses outside the known list
        for extra in draft
            .selected()
            .iter()
            .filter(|c| !self.state.filter().courses().contains(c))
        {
            writeln!(out, "[x] {extra}")?;
        }
        Ok(())
    }
}
