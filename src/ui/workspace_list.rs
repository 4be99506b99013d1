// Workspace rows: `*` marker for the current workspace, reversed name under the cursor.

use ratatui::prelude::*;

use crate::model::workspace::Item;

pub fn render_list(frame: &mut Frame, area: Rect, items: &[Item], cursor: usize, scroll: usize) {
    let rows = items.iter().enumerate().skip(scroll).take(area.height as usize);
    for (row, (idx, item)) in rows.enumerate() {
        let marker = if item.is_current { "*" } else { " " };
        let mut style = Style::default();
        if item.is_current {
            style = style.bold();
        }
        if idx == cursor {
            style = style.reversed();
        }
        let line = Line::from(vec![
            Span::raw(marker),
            Span::raw(" "),
            Span::styled(item.name.as_str(), style),
        ]);
        frame.render_widget(line, Rect::new(area.x, area.y + row as u16, area.width, 1));
    }
}

/// Compute scroll offset to keep the cursor visible.
pub fn compute_scroll(cursor: usize, visible_height: usize, current_offset: usize) -> usize {
    if visible_height == 0 {
        current_offset
    } else if cursor < current_offset {
        cursor
    } else if cursor >= current_offset + visible_height {
        cursor + 1 - visible_height
    } else {
        current_offset
    }
}
