//! Terminal rendering of the ledger, catalog and results.

use bac_core::report::{format_bac, format_entry, format_time_to_sober, sober_at};
use bac_core::{CalculationResult, DrinkCatalog, DrinkLedger};
use std::io::{self, Write};

pub fn write_ledger<W: Write>(out: &mut W, ledger: &DrinkLedger) -> io::Result<()> {
    writeln!(out)?;
    if ledger.is_empty() {
        writeln!(out, "  (no drinks yet)")?;
        return Ok(());
    }

    writeln!(out, "  Drinks:")?;
    for entry in ledger.list() {
        writeln!(out, "  {:>4}  {}", entry.id.to_string(), format_entry(entry))?;
    }
    Ok(())
}

pub fn write_catalog<W: Write>(out: &mut W, catalog: &DrinkCatalog) -> io::Result<()> {
    for drink in catalog.iter() {
        writeln!(
            out,
            "  {:<10} {:<24} {:>5} ml  {:>4.1}%  {:.1} g",
            drink.key,
            drink.display_name,
            drink.volume_ml,
            drink.abv * 100.0,
            drink.alcohol_grams()
        )?;
    }
    Ok(())
}

pub fn write_result<W: Write>(
    out: &mut W,
    result: &CalculationResult,
    show_sober_clock: bool,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "╭─────────────────────────────────────────╮")?;
    writeln!(out, "│  {}  [{}]", result.label, result.class.as_str())?;
    writeln!(out, "╰─────────────────────────────────────────╯")?;
    writeln!(out)?;
    writeln!(out, "  BAC: {}", format_bac(result.bac))?;
    writeln!(out, "  {}", format_time_to_sober(result.time_to_sober_hours))?;

    if show_sober_clock && result.time_to_sober_hours > 0.0 {
        if let Some(at) = sober_at(chrono::Local::now(), result.time_to_sober_hours) {
            writeln!(out, "  Sober around {} (local time)", at.format("%H:%M"))?;
        }
    }

    if !result.warnings.is_empty() {
        writeln!(out)?;
        for warning in &result.warnings {
            writeln!(out, "  ⚠ {}", warning)?;
        }
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bac_core::{BiologicalSex, Session};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_ledger_lines_show_ids() {
        let mut ledger = DrinkLedger::new();
        ledger.add_by_key("beer", 2).unwrap();
        ledger.add_by_key("wine", 1).unwrap();

        let text = render(|out| write_ledger(out, &ledger));
        assert!(text.contains("#1  2x Cerveza (330ml)"));
        assert!(text.contains("#2  1x Vino (150ml)"));
    }

    #[test]
    fn test_empty_ledger() {
        let text = render(|out| write_ledger(out, &DrinkLedger::new()));
        assert!(text.contains("no drinks yet"));
    }

    #[test]
    fn test_result_block() {
        let mut session = Session::new();
        session.set_weight_kg(70.0).unwrap();
        session.set_sex(BiologicalSex::Male);
        session.ledger_mut().add_by_key("beer", 2).unwrap();
        let result = session.calculate().unwrap();

        let text = render(|out| write_result(out, &result, false));
        assert!(text.contains("Alegría / Desinhibición  [warn]"));
        assert!(text.contains("BAC: 0.055%"));
        assert!(text.contains("Tiempo estimado para 0.00%: 3h 39min"));
        assert!(text.contains("⚠ LEGALMENTE NO APTO PARA CONDUCIR"));
        assert!(!text.contains("Sober around"));
    }

    #[test]
    fn test_result_block_with_sober_clock() {
        let mut session = Session::new();
        session.set_weight_kg(70.0).unwrap();
        session.ledger_mut().add_by_key("beer", 2).unwrap();
        let result = session.calculate().unwrap();

        let text = render(|out| write_result(out, &result, true));
        assert!(text.contains("Sober around "));
        assert!(text.contains("(local time)"));
    }

    #[test]
    fn test_sober_clock_skipped_when_sober() {
        let result = Session::from_profile(&bac_core::config::ProfileConfig {
            weight_kg: Some(70.0),
            ..Default::default()
        })
        .calculate()
        .unwrap();

        let text = render(|out| write_result(out, &result, true));
        assert!(!text.contains("Sober around"));
    }

    #[test]
    fn test_extreme_time_to_sober_does_not_panic() {
        let mut session = Session::new();
        session.set_weight_kg(1e-9).unwrap();
        session.ledger_mut().add_by_key("spirit", 1000).unwrap();
        let result = session.calculate().unwrap();

        let text = render(|out| write_result(out, &result, true));
        assert!(text.contains("Peligro grave / Coma etílico"));
        assert!(!text.contains("Sober around"));
    }

    #[test]
    fn test_catalog_listing() {
        let text = render(|out| write_catalog(out, bac_core::get_default_catalog()));
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("cocktail"));
    }
}
