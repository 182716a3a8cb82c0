//! Plain-text renderer for a [`Screen`].

use super::{DetailPane, Layout, ListRow, Screen};
use crate::domain::UNTITLED;

const APP_TITLE: &str = "Notes";
const NEW_NOTE_ACTION: &str = "[+ New Note]";
const DELETE_ACTION: &str = "[x]";
const BACK_ACTION: &str = "< Back";
const DIVIDER: &str = " | ";
const EMPTY_DETAIL: &str = "Select a note or create a new one";
const CONTENT_PLACEHOLDER: &str = "Start writing...";

/// Smallest list column used in the split layout.
const MIN_LIST_WIDTH: usize = 28;

/// Draws `screen` into lines of exactly `width` columns (trailing spaces
/// trimmed), joined with newlines.
pub fn render(screen: &Screen, width: usize) -> String {
    let width = width.max(20);
    let mut out = Vec::new();

    out.push(spread(APP_TITLE, NEW_NOTE_ACTION, width));
    out.push("=".repeat(width));

    match screen.layout {
        Layout::Split => {
            let list_width = (width / 3).max(MIN_LIST_WIDTH).min(width / 2);
            let detail_width = width - list_width - DIVIDER.chars().count();
            let list = list_lines(screen, list_width);
            let detail = detail_lines(&screen.detail, detail_width, false);

            let height = list.len().max(detail.len());
            for i in 0..height {
                let left = list.get(i).map(String::as_str).unwrap_or("");
                let right = detail.get(i).map(String::as_str).unwrap_or("");
                out.push(format!(
                    "{}{}{}",
                    pad(left, list_width),
                    DIVIDER,
                    pad(right, detail_width)
                ));
            }
        }
        Layout::ListOnly => out.extend(list_lines(screen, width)),
        Layout::DetailOnly => out.extend(detail_lines(&screen.detail, width, true)),
    }

    out.iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_lines(screen: &Screen, width: usize) -> Vec<String> {
    let mut lines = vec![truncate_str(&format!("Search: {}", screen.search), width)];
    lines.push("-".repeat(width));

    if screen.rows.is_empty() {
        let message = if screen.total == 0 {
            "No notes yet"
        } else {
            "No matching notes"
        };
        lines.push(format!("  {message}"));
        return lines;
    }

    for row in &screen.rows {
        lines.extend(row_lines(row, width));
        lines.push(String::new());
    }
    lines.pop();
    lines
}

fn row_lines(row: &ListRow, width: usize) -> Vec<String> {
    let marker = if row.selected { "> " } else { "  " };
    let title_width = width.saturating_sub(marker.len() + DELETE_ACTION.len() + 1);
    let mut lines = vec![format!(
        "{marker}{} {DELETE_ACTION}",
        pad(&truncate_str(&row.title, title_width), title_width)
    )];

    let indent = "    ";
    let body_width = width.saturating_sub(indent.len());
    for preview in &row.preview {
        lines.push(format!("{indent}{}", truncate_str(preview, body_width)));
    }
    lines.push(format!("{indent}{}", truncate_str(&row.updated, body_width)));
    lines
}

fn detail_lines(detail: &DetailPane, width: usize, with_back: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if with_back {
        lines.push(BACK_ACTION.to_string());
    }

    match detail {
        DetailPane::Empty => lines.push(EMPTY_DETAIL.to_string()),
        DetailPane::Editor {
            title,
            content,
            updated,
            autofocus_title,
            ..
        } => {
            let cursor = if *autofocus_title { "_" } else { "" };
            let shown = if title.is_empty() {
                format!("({UNTITLED})")
            } else {
                title.clone()
            };
            lines.push(truncate_str(&format!("# {shown}{cursor}"), width));
            lines.push(truncate_str(&format!("Updated {updated}"), width));
            lines.push("-".repeat(width));

            if content.is_empty() {
                lines.push(format!("({CONTENT_PLACEHOLDER})"));
            } else {
                lines.extend(content.lines().map(|line| truncate_str(line, width)));
            }
        }
    }

    lines.iter().map(|l| truncate_str(l, width)).collect()
}

/// Left-aligns `left` and right-aligns `right` within `width`.
fn spread(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}

fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteId;
    use pretty_assertions::assert_eq;

    fn row(title: &str, selected: bool) -> ListRow {
        ListRow {
            id: NoteId::new(),
            title: title.to_string(),
            preview: vec!["first line".into(), "second line".into()],
            updated: "5m ago".into(),
            selected,
        }
    }

    fn screen(layout: Layout, rows: Vec<ListRow>, detail: DetailPane) -> Screen {
        let total = rows.len();
        Screen {
            layout,
            search: String::new(),
            rows,
            total,
            detail,
        }
    }

    fn editor(title: &str, content: &str, autofocus: bool) -> DetailPane {
        DetailPane::Editor {
            id: NoteId::new(),
            title: title.into(),
            content: content.into(),
            updated: "Just now".into(),
            autofocus_title: autofocus,
        }
    }

    #[test]
    fn truncate_str_adds_ellipsis() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_str("this is too long", 8), "this is…");
    }

    #[test]
    fn header_has_title_and_new_note_action() {
        let out = render(&screen(Layout::ListOnly, vec![], DetailPane::Empty), 40);
        let header = out.lines().next().unwrap();
        assert!(header.starts_with("Notes"));
        assert!(header.ends_with("[+ New Note]"));
        assert_eq!(header.chars().count(), 40);
    }

    #[test]
    fn split_layout_draws_both_panes() {
        let out = render(
            &screen(
                Layout::Split,
                vec![row("Groceries", true)],
                editor("Groceries", "eggs\nmilk", false),
            ),
            100,
        );

        assert!(out.contains("> Groceries"));
        assert!(out.contains("[x]"));
        assert!(out.contains("first line"));
        assert!(out.contains("5m ago"));
        assert!(out.contains("# Groceries"));
        assert!(out.contains("milk"));
        assert!(out.lines().all(|l| l.chars().count() <= 100));
    }

    #[test]
    fn empty_list_messages() {
        let none = render(&screen(Layout::ListOnly, vec![], DetailPane::Empty), 60);
        assert!(none.contains("No notes yet"));

        let mut filtered = screen(Layout::ListOnly, vec![], DetailPane::Empty);
        filtered.total = 3;
        filtered.search = "zzz".into();
        let out = render(&filtered, 60);
        assert!(out.contains("No matching notes"));
        assert!(out.contains("Search: zzz"));
    }

    #[test]
    fn empty_detail_shows_placeholder() {
        let out = render(&screen(Layout::Split, vec![], DetailPane::Empty), 100);
        assert!(out.contains("Select a note or create a new one"));
    }

    #[test]
    fn detail_only_has_back_action_and_no_list() {
        let out = render(
            &screen(Layout::DetailOnly, vec![row("Hidden", true)], editor("", "", true)),
            50,
        );
        assert!(out.contains("< Back"));
        assert!(out.contains("# (Untitled Note)_"));
        assert!(out.contains("(Start writing...)"));
        assert!(!out.contains("Search:"));
    }

    #[test]
    fn long_titles_are_truncated_to_the_pane() {
        let long = "a very long title that keeps going and going and going";
        let out = render(&screen(Layout::ListOnly, vec![row(long, false)], DetailPane::Empty), 30);
        assert!(out.contains('…'));
        assert!(out.lines().all(|l| l.chars().count() <= 30));
    }
}
