//! Plain-text rendering of error lists.

use crate::error_list::ErrorList;
use std::io::{self, Write};

/// Writes one `file:line:column: message` line per error.
pub fn print_error<W: Write>(out: &mut W, list: &ErrorList) -> io::Result<()> {
    for err in list {
        writeln!(out, "{err}")?;
    }
    Ok(())
}

/// Renders at most `max_displayed` errors, one per line, followed by an
/// `and N more errors` line when the list is longer.
pub fn render_summary(list: &ErrorList, max_displayed: usize) -> String {
    let mut out = String::new();
    for err in list.iter().take(max_displayed) {
        out.push_str(&format!("{err}\n"));
    }
    if list.len() > max_displayed {
        out.push_str(&format!("and {} more errors\n", list.len() - max_displayed));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use zo_source::Position;

    fn list_of(n: usize) -> ErrorList {
        let mut list = ErrorList::new();
        for line in 1..=n {
            list.add(
                Position {
                    filename: "main.zo".to_string(),
                    offset: 0,
                    line,
                    column: 1,
                },
                format!("error {line}"),
            );
        }
        list
    }

    #[test]
    fn print_error_writes_every_entry() {
        let mut out = Vec::new();
        print_error(&mut out, &list_of(2)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "main.zo:1:1: error 1\nmain.zo:2:1: error 2\n"
        );
    }

    #[test]
    fn summary_within_cap() {
        let summary = render_summary(&list_of(3), 10);
        assert_eq!(summary.lines().count(), 3);
        assert!(!summary.contains("more errors"));
    }

    #[test]
    fn summary_truncates_past_cap() {
        let summary = render_summary(&list_of(13), 10);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[9], "main.zo:10:1: error 10");
        assert_eq!(lines[10], "and 3 more errors");
    }

    #[test]
    fn summary_of_empty_list() {
        assert_eq!(render_summary(&ErrorList::new(), 10), "");
    }
}
