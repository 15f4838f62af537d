use crate::cli::parser::Commands;
use crate::cli::repl::{SessionCommand, parse_line};
use crate::config::Config;
use crate::core::clock::to_display;
use crate::core::schedule::{
    Field, HeaderField, Outcome, Schedule, date_hint, duration_hint, parse_row_target,
};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, text::row_line};
use crate::models::Category;
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::render::{palette_view, schedule_view};
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One editing session: the schedule lives here and dies with it.
pub struct SessionRunner<'a> {
    schedule: Schedule,
    cfg: &'a Config,
    colors: bool,
}

impl<'a> SessionRunner<'a> {
    pub fn new(cfg: &'a Config, colors: bool) -> AppResult<Self> {
        Ok(Self {
            schedule: Schedule::from_config(cfg)?,
            cfg,
            colors,
        })
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run(&mut self, input: &mut dyn BufRead, prompt: bool) -> AppResult<()> {
        let mut line = String::new();

        loop {
            if prompt {
                print!("wtimeline> ");
                io::stdout().flush().ok();
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let command = match parse_line(&line) {
                Ok(Some(c)) => c,
                Ok(None) => continue,
                Err(e) => {
                    // clap renders help and usage errors itself
                    eprint!("{}", e.render());
                    continue;
                }
            };

            match self.execute(command, input) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => error(e),
            }
        }

        info(format!(
            "Session closed ({} rows discarded)",
            self.schedule.len()
        ));
        Ok(())
    }

    pub fn execute(&mut self, command: SessionCommand, input: &mut dyn BufRead) -> AppResult<Flow> {
        match command {
            SessionCommand::Show => print!("{}", schedule_view(&self.schedule, self.colors)),

            SessionCommand::Blocks { category } => {
                let filter = parse_category(category.as_deref())?;
                print!("{}", palette_view(filter, self.colors));
            }

            SessionCommand::Set { row, field, value } => {
                let field: Field = field.parse()?;
                let outcome = self.schedule.change(row, field, &value)?;
                self.report(row, field, outcome)?;
            }

            SessionCommand::Blur { row } => {
                let outcome = self.schedule.blur(row)?;
                self.report_row(row, outcome)?;
            }

            SessionCommand::Edit { row, field, value } => {
                let field: Field = field.parse()?;
                let mut outcome = self.schedule.change(row, field, &value)?;
                if field.commits_on_blur() {
                    let blurred = self.schedule.blur(row)?;
                    outcome.appended |= blurred.appended;
                    outcome.recalculated_from = outcome.recalculated_from.or(blurred.recalculated_from);
                }
                self.report(row, field, outcome)?;
            }

            SessionCommand::Drop { block_id, target } => {
                match self.schedule.drop_block(&block_id, &target)? {
                    Some(outcome) => {
                        let row = parse_row_target(&target).unwrap_or(0);
                        self.report_row(row, outcome)?;
                    }
                    None => warning(format!("'{target}' is not a timeline row: nothing dropped")),
                }
            }

            SessionCommand::Place { block, row } => {
                let outcome = self.schedule.place_number(block, row)?;
                self.report_row(row, outcome)?;
            }

            SessionCommand::Delete { row } => {
                self.schedule.delete(row)?;
                success(format!(
                    "Row {row} deleted ({} rows left)",
                    self.schedule.len()
                ));
            }

            SessionCommand::Header { field, value } => {
                let field: HeaderField = field.parse()?;
                self.schedule.set_header(field, &value)?;
                if field == HeaderField::Date
                    && let Some(hint) = date_hint(&value)
                {
                    warning(hint);
                }
                success(format!("Header {field:?} set"));
            }

            SessionCommand::Export {
                format,
                file,
                force,
            } => {
                let target = file.unwrap_or_else(|| self.cfg.export_file.clone());
                let path = expand_tilde(&target);
                ExportLogic::export(&self.schedule, format, &path, force, input)?;
                self.schedule
                    .record("export", format.as_str(), path.display().to_string());
            }

            SessionCommand::Log => print!("{}", self.schedule.log().render(self.colors)),

            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn report(&self, row: usize, field: Field, outcome: Outcome) -> AppResult<()> {
        if field == Field::Duration
            && let Some(hint) = duration_hint(self.schedule.row(row)?.duration)
        {
            warning(hint);
        }
        self.report_row(row, outcome)
    }

    fn report_row(&self, row: usize, outcome: Outcome) -> AppResult<()> {
        success(format!("Row {row}: {}", row_line(self.schedule.row(row)?)));

        if outcome.appended
            && let Some(tail) = self.schedule.rows().last()
        {
            info(format!(
                "Row {} added at {}",
                self.schedule.len() - 1,
                to_display(tail.time)
            ));
        }
        Ok(())
    }
}

pub(crate) fn parse_category(name: Option<&str>) -> AppResult<Option<Category>> {
    match name {
        None => Ok(None),
        Some(n) => Category::from_name(n)
            .map(Some)
            .ok_or_else(|| AppError::InvalidField(format!("unknown category '{n}'"))),
    }
}

/// Handle the `session` command
pub fn handle(cmd: &Commands, cfg: &Config, colors: bool) -> AppResult<()> {
    if let Commands::Session { script } = cmd {
        let mut runner = SessionRunner::new(cfg, colors)?;

        match script {
            Some(path) => {
                let file = File::open(expand_tilde(path))?;
                let mut reader = BufReader::new(file);
                runner.run(&mut reader, false)?;
            }
            None => {
                let stdin = io::stdin();
                let prompt = stdin.is_terminal();
                if prompt {
                    header("Wedding Timeline Builder");
                    info("Type `help` for the list of commands, `quit` to leave.");
                }
                let mut reader = stdin.lock();
                runner.run(&mut reader, prompt)?;
            }
        }
    }

    Ok(())
}
