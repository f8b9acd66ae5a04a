//! One-shot subcommands over a session store.

use anyhow::{Context, Result};
use serde_json::json;
use std::io::Write;
use tracing::info;

use historian::{
    event_block, figure_block, leaders_text, search_events, submit_event, submit_figure,
    EventForm, FigureForm, HistoryStore, LEADERS,
};

use crate::cli::Commands;

/// Run a non-interactive command, writing its output to `out`
pub fn execute(cmd: Commands, store: &mut HistoryStore, out: &mut dyn Write) -> Result<()> {
    match cmd {
        Commands::Tui => anyhow::bail!("the tui command is handled by main"),

        Commands::Events { json } => {
            if json {
                let text = serde_json::to_string_pretty(store.events()).context("encoding events")?;
                writeln!(out, "{}", text)?;
            } else {
                for event in store.events() {
                    writeln!(out, "{}\n", event_block(event))?;
                }
            }
        }

        Commands::Search { keyword, json } => match search_events(store, &keyword) {
            Ok(hits) => {
                info!(keyword = %keyword, hits = hits.len(), "search");
                if json {
                    let text = serde_json::to_string_pretty(&hits).context("encoding search results")?;
                    writeln!(out, "{}", text)?;
                } else {
                    for event in hits {
                        writeln!(out, "{}\n", event_block(event))?;
                    }
                }
            }
            Err(e) if e.is_informational() => writeln!(out, "{}", e)?,
            Err(e) => return Err(e.into()),
        },

        Commands::Figures { json } => {
            if json {
                let value = json!({
                    "figures": store.figures(),
                    "leaders": LEADERS,
                });
                let text = serde_json::to_string_pretty(&value).context("encoding figures")?;
                writeln!(out, "{}", text)?;
            } else {
                writeln!(out, "Figures:")?;
                for figure in store.figures() {
                    writeln!(out, "{}\n", figure_block(figure))?;
                }
                for leader in LEADERS {
                    writeln!(out, "{}", leader)?;
                }
            }
        }

        Commands::Leaders => {
            write!(out, "{}", leaders_text(store.figures_by_first_period_start()))?;
        }

        Commands::AddEvent {
            name,
            date,
            description,
        } => {
            let form = EventForm::new(name, date, description);
            let block = event_block(submit_event(store, &form)?);
            writeln!(out, "{}\n", block)?;
            writeln!(out, "Event added ({} total)", store.events().len())?;
        }

        Commands::AddFigure { name, periods } => {
            let form = FigureForm::new(name, periods);
            let block = figure_block(submit_figure(store, &form)?);
            writeln!(out, "{}\n", block)?;
            writeln!(out, "Figure added ({} total)", store.figures().len())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use historian::InputError;

    fn run(cmd: Commands, store: &mut HistoryStore) -> Result<String> {
        let mut out = Vec::new();
        execute(cmd, store, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_events_lists_samples() {
        let mut store = HistoryStore::with_sample_data();
        let text = run(Commands::Events { json: false }, &mut store).unwrap();

        assert!(text.starts_with("Fransız Devrimi\n- Date: 14/07/1789"));
        assert_eq!(text.matches("- Date: ").count(), 10);
    }

    #[test]
    fn test_events_json() {
        let mut store = HistoryStore::with_sample_data();
        let text = run(Commands::Events { json: true }, &mut store).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 10);
        assert_eq!(value[0]["date"], "1789-07-14");
    }

    #[test]
    fn test_search_no_match_is_not_an_error() {
        let mut store = HistoryStore::with_sample_data();
        let text = run(
            Commands::Search {
                keyword: "xyzzy".to_string(),
                json: false,
            },
            &mut store,
        )
        .unwrap();

        assert!(text.contains("no event matches"));
    }

    #[test]
    fn test_search_blank_keyword_fails() {
        let mut store = HistoryStore::with_sample_data();
        let err = run(
            Commands::Search {
                keyword: String::new(),
                json: false,
            },
            &mut store,
        )
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::MissingField { field: "search" })
        );
    }

    #[test]
    fn test_add_event_then_count() {
        let mut store = HistoryStore::with_sample_data();
        let text = run(
            Commands::AddEvent {
                name: "Test Olay".to_string(),
                date: "14/07/1789".to_string(),
                description: "desc".to_string(),
            },
            &mut store,
        )
        .unwrap();

        assert!(text.contains("Event added (11 total)"));
    }

    #[test]
    fn test_add_figure_malformed_leaves_store_empty() {
        let mut store = HistoryStore::new();
        let result = run(
            Commands::AddFigure {
                name: "Test Kişi".to_string(),
                periods: "Dönem A - 01/01/1900 - 31/12/1910, BadSpec".to_string(),
            },
            &mut store,
        );

        assert!(result.is_err());
        assert!(store.figures().is_empty());
    }

    #[test]
    fn test_figures_includes_leaders_list() {
        let mut store = HistoryStore::new();
        let text = run(Commands::Figures { json: false }, &mut store).unwrap();

        assert!(text.contains("Catherine the Great"));
        assert_eq!(text.lines().count(), 1 + LEADERS.len());
    }

    #[test]
    fn test_leaders_sorted() {
        let mut store = HistoryStore::new();
        submit_figure(&mut store, &FigureForm::new("F1", "p - 01/01/1950 - 01/01/1960")).unwrap();
        submit_figure(&mut store, &FigureForm::new("F2", "p - 01/01/1900 - 01/01/1910")).unwrap();

        let text = run(Commands::Leaders, &mut store).unwrap();
        let f1 = text.find("- F1:").unwrap();
        let f2 = text.find("- F2:").unwrap();
        assert!(f2 < f1);
    }
}
