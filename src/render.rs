// 🖨️ Rendering - records as the text blocks the shells display

use crate::entities::{Event, Figure, Period};
use crate::parser::format_date;

/// Multi-line list entry for an event
pub fn event_block(event: &Event) -> String {
    format!(
        "{}\n- Date: {}\n- Description: {}",
        event.name,
        format_date(event.date),
        event.description
    )
}

/// Labelled lines for the event detail view
pub fn event_detail(event: &Event) -> Vec<(&'static str, String)> {
    vec![
        ("Name", event.name.clone()),
        ("Date", format_date(event.date)),
        ("Description", event.description.clone()),
    ]
}

pub fn period_line(period: &Period) -> String {
    format!(
        "- {}: {} - {}",
        period.name,
        format_date(period.start_date),
        format_date(period.end_date)
    )
}

/// Figure name followed by one line per period
pub fn figure_block(figure: &Figure) -> String {
    let mut block = format!("{}:", figure.name);
    for period in &figure.periods {
        block.push('\n');
        block.push_str(&period_line(period));
    }
    block
}

/// Leaders text for figures already sorted by first period start
pub fn leaders_text<'a>(figures: impl IntoIterator<Item = &'a Figure>) -> String {
    let mut text = String::from("Historical leaders:\n");
    for figure in figures {
        text.push_str(&format!("- {}:\n", figure.name));
        for period in &figure.periods {
            text.push_str("    ");
            text.push_str(&period_line(period));
            text.push('\n');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_event_block() {
        let event = Event::new("Fransız Devrimi", date(1789, 7, 14), "Krallık bitti.");
        assert_eq!(
            event_block(&event),
            "Fransız Devrimi\n- Date: 14/07/1789\n- Description: Krallık bitti."
        );
    }

    #[test]
    fn test_figure_block_lists_periods_in_order() {
        let figure = Figure::new(
            "Atatürk",
            vec![
                Period::new("Savaş", date(1919, 5, 19), date(1923, 7, 24)),
                Period::new("Cumhurbaşkanlığı", date(1923, 10, 29), date(1938, 11, 10)),
            ],
        );

        assert_eq!(
            figure_block(&figure),
            "Atatürk:\n- Savaş: 19/05/1919 - 24/07/1923\n- Cumhurbaşkanlığı: 29/10/1923 - 10/11/1938"
        );
    }

    #[test]
    fn test_leaders_text_indents_periods() {
        let figure = Figure::new("X", vec![Period::new("p", date(1900, 1, 1), date(1901, 1, 1))]);
        let text = leaders_text([&figure]);

        assert_eq!(text, "Historical leaders:\n- X:\n    - p: 01/01/1900 - 01/01/1901\n");
    }

    #[test]
    fn test_event_detail_labels() {
        let event = Event::new("A", date(1, 2, 3), "d");
        let detail = event_detail(&event);

        assert_eq!(detail[1], ("Date", "03/02/0001".to_string()));
    }
}
