mod app;
mod dates;
mod entry;
mod help;
mod picker;
mod theme;
use crate::app::App;
use crate::picker::{DatePicker, DateRange};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        before: Option<Date>,
        after: Option<Date>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut before = None;
        let mut after = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("before") => before = Some(date_value(&mut parser)?),
                Arg::Long("after") => after = Some(date_value(&mut parser)?),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match dates::parse_dmy(&value) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            date,
            before,
            after,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                date,
                before,
                after,
            } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let range = DateRange::new(
                    before.unwrap_or(DateRange::DEFAULT_EARLIEST),
                    after.unwrap_or(today),
                )
                .context("--before and --after do not leave any pickable dates")?;
                let picked = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let mut picker = DatePicker::new(today, range);
                    if let Some(date) = date {
                        picker = picker.with_selected(date);
                    }
                    let picked = App::new(picker).run(terminal)?;
                    Ok(picked)
                })?;
                if let Some(date) = picked {
                    println!("{}", dates::format_dmy(date));
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: datepick [OPTIONS] [DD/MM/YYYY]");
                println!();
                println!("Terminal date picker with masked DD/MM/YYYY keyboard entry");
                println!();
                println!("Arguments:");
                println!("  [DD/MM/YYYY]            Start with this date picked");
                println!();
                println!("Options:");
                println!("      --before <DD/MM/YYYY>  Earliest pickable date [default: 01/01/1900]");
                println!("      --after <DD/MM/YYYY>   Latest pickable date [default: today]");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn date_value(parser: &mut Parser) -> Result<Date, lexopt::Error> {
    let value = parser.value()?.string()?;
    match dates::parse_dmy(&value) {
        Ok(d) => Ok(d),
        Err(e) => Err(lexopt::Error::ParsingFailed {
            value,
            error: Box::new(e),
        }),
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
