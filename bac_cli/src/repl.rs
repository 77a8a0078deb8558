//! Interactive session loop.
//!
//! Reads one command per line, mutates the session and re-renders the drink
//! list after every change. Errors are shown and the loop keeps going.

use crate::display;
use bac_core::input::{parse_hours, parse_quantity, parse_weight};
use bac_core::{get_default_catalog, BiologicalSex, EntryId, Error, Result, Session};
use std::io::{BufRead, Write};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Add { key: String, quantity: u32 },
    Remove(EntryId),
    List,
    Weight(f64),
    Sex(BiologicalSex),
    Hours(f64),
    Calc,
    Drinks,
    Help,
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Command::Empty);
        };
        let arg = words.next();

        let command = match (verb.to_lowercase().as_str(), arg) {
            ("add" | "a", Some(key)) => {
                let quantity = match words.next() {
                    Some(qty) => parse_quantity(qty)?,
                    None => 1,
                };
                get_default_catalog().lookup(key)?;
                Command::Add {
                    key: key.to_lowercase(),
                    quantity,
                }
            }
            ("remove" | "rm" | "r", Some(id)) => Command::Remove(id.parse()?),
            ("list" | "ls" | "l", None) => Command::List,
            ("weight" | "w", Some(kg)) => Command::Weight(parse_weight(kg)?),
            ("sex" | "s", Some(sex)) => Command::Sex(sex.parse()?),
            ("hours" | "h", Some(hours)) => Command::Hours(parse_hours(hours)?),
            ("calc" | "c", None) => Command::Calc,
            ("drinks" | "d", None) => Command::Drinks,
            ("help" | "?", None) => Command::Help,
            ("quit" | "exit" | "q", None) => Command::Quit,
            (verb, _) => {
                return Err(Error::InvalidCommand(format!(
                    "Unrecognised command '{}' (type 'help')",
                    verb
                )))
            }
        };

        Ok(command)
    }
}

/// Drive a session from `input` until `quit` or end of input
pub fn run<R, W>(session: &mut Session, input: R, out: &mut W, show_sober_clock: bool) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "BAC estimator - type 'help' for commands")?;
    write_status(out, session)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "✗ {}", e)?;
                continue;
            }
        };

        if !apply(session, command, out, show_sober_clock)? {
            break;
        }
    }

    Ok(())
}

/// Carry out one command; returns `false` once the session should end
///
/// Only output failures are returned as errors. Everything else is printed
/// and the session continues.
pub fn apply<W: Write>(
    session: &mut Session,
    command: Command,
    out: &mut W,
    show_sober_clock: bool,
) -> Result<bool> {
    tracing::debug!("Session command: {:?}", command);

    match command {
        Command::Empty => {}
        Command::Quit => return Ok(false),
        Command::Help => write_help(out)?,
        Command::Drinks => display::write_catalog(out, get_default_catalog())?,
        Command::List => display::write_ledger(out, session.ledger())?,
        Command::Add { key, quantity } => match session.ledger_mut().add_by_key(&key, quantity) {
            Ok(_) => display::write_ledger(out, session.ledger())?,
            Err(e) => writeln!(out, "✗ {}", e)?,
        },
        Command::Remove(id) => match session.ledger_mut().remove(id) {
            Some(_) => display::write_ledger(out, session.ledger())?,
            None => writeln!(out, "No drink {} in the list", id)?,
        },
        Command::Weight(kg) => match session.set_weight_kg(kg) {
            Ok(()) => write_status(out, session)?,
            Err(e) => writeln!(out, "✗ {}", e)?,
        },
        Command::Sex(sex) => {
            session.set_sex(sex);
            write_status(out, session)?;
        }
        Command::Hours(hours) => match session.set_elapsed_hours(hours) {
            Ok(()) => write_status(out, session)?,
            Err(e) => writeln!(out, "✗ {}", e)?,
        },
        Command::Calc => match session.calculate() {
            Ok(result) => display::write_result(out, &result, show_sober_clock)?,
            Err(e) => writeln!(out, "✗ {}", e)?,
        },
    }

    Ok(true)
}

fn write_status<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    let weight = match session.weight_kg() {
        Some(kg) => format!("{} kg", kg),
        None => "(not set)".to_string(),
    };
    writeln!(
        out,
        "  Weight: {}  Sex: {}  Hours: {}",
        weight,
        session.sex(),
        session.elapsed_hours()
    )?;
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> Result<()> {
    let keys = get_default_catalog().keys().join(", ");
    writeln!(out, "  add <type> [count]   add a drink ({})", keys)?;
    writeln!(out, "  remove <id>          remove a drink by its #id")?;
    writeln!(out, "  list                 show the drinks so far")?;
    writeln!(out, "  weight <kg>          set body weight")?;
    writeln!(out, "  sex <male|female>    set biological sex")?;
    writeln!(out, "  hours <h>            set hours since drinking started")?;
    writeln!(out, "  calc                 estimate BAC")?;
    writeln!(out, "  drinks               show drink types")?;
    writeln!(out, "  quit                 leave the session")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::new();
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out, false).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_rejected_values_keep_session_running() {
        let mut session = Session::new();
        let mut out = Vec::new();

        assert!(apply(&mut session, Command::Weight(-1.0), &mut out, false).unwrap());
        assert!(apply(&mut session, Command::Hours(f64::NAN), &mut out, false).unwrap());
        assert!(!apply(&mut session, Command::Quit, &mut out, false).unwrap());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("✗ Por favor, introduce un peso válido."));
        assert!(text.contains("✗ Invalid elapsed time"));
        assert_eq!(session.weight_kg(), None);
        assert_eq!(session.elapsed_hours(), 0.0);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("add beer 2").unwrap(),
            Command::Add { key: "beer".into(), quantity: 2 }
        );
        assert_eq!(
            Command::parse("ADD Wine").unwrap(),
            Command::Add { key: "wine".into(), quantity: 1 }
        );
        assert_eq!(Command::parse("rm #3").unwrap(), Command::Remove(EntryId(3)));
        assert_eq!(Command::parse("weight 70").unwrap(), Command::Weight(70.0));
        assert_eq!(
            Command::parse("sex female").unwrap(),
            Command::Sex(BiologicalSex::Female)
        );
        assert_eq!(Command::parse("  ").unwrap(), Command::Empty);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Command::parse("add beer 0"),
            Err(Error::InvalidQuantity(_))
        ));
        assert!(matches!(
            Command::parse("add mead"),
            Err(Error::UnknownDrink(_))
        ));
        assert!(matches!(Command::parse("weight -2"), Err(Error::InvalidWeight)));
        assert!(matches!(
            Command::parse("dance"),
            Err(Error::InvalidCommand(_))
        ));
        assert!(Command::parse("add").is_err());
    }

    #[test]
    fn test_session_add_and_calc() {
        let (session, out) = run_script("weight 70\nadd beer 2\ncalc\nquit\n");

        assert_eq!(session.ledger().len(), 1);
        assert!(out.contains("#1  2x Cerveza (330ml)"));
        assert!(out.contains("BAC: 0.055%"));
        assert!(out.contains("Alegría / Desinhibición"));
    }

    #[test]
    fn test_calc_without_weight_is_blocked() {
        let (_, out) = run_script("add beer\ncalc\n");

        assert!(out.contains("Por favor, introduce un peso válido."));
        assert!(!out.contains("BAC:"));
    }

    #[test]
    fn test_remove_uses_stable_ids() {
        let (session, out) = run_script("add beer\nadd wine\nadd spirit\nremove 1\nremove 3\n");

        let keys: Vec<_> = session
            .ledger()
            .list()
            .iter()
            .map(|e| e.drink.key.as_str())
            .collect();
        assert_eq!(keys, vec!["wine"]);
        assert!(out.contains("#2  1x Vino (150ml)"));
    }

    #[test]
    fn test_remove_unknown_id_reports() {
        let (session, out) = run_script("add beer\nremove 9\n");
        assert_eq!(session.ledger().len(), 1);
        assert!(out.contains("No drink #9 in the list"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (session, out) = run_script("add beer 0\nfoo\nadd beer 1\n");
        assert!(out.contains("✗ Invalid quantity '0'"));
        assert!(out.contains("Unrecognised command 'foo'"));
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn test_hours_bring_bac_down() {
        let (_, out) = run_script("weight 70\nadd beer 2\nhours 4\ncalc\n");
        assert!(out.contains("BAC: 0.000%"));
        assert!(out.contains("Estás sobrio (estimado)"));
        assert!(out.contains("Sobrio / Efectos mínimos"));
    }
}
