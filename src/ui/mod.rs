// Frame layout: context label, workspace rows, delete banner.

pub mod confirm;
pub mod workspace_list;

use ratatui::{prelude::*, widgets::Clear};

use crate::app::PickerState;
use crate::ui::{
    confirm::render_delete_banner,
    workspace_list::{compute_scroll, render_list},
};

/// First row used by the workspace list.
pub const LIST_TOP: u16 = 2;

/// Rows between the list start and the banner row.
pub fn list_area(area: Rect) -> Rect {
    let top = area.y + LIST_TOP.min(area.height);
    let bottom = area.bottom().saturating_sub(2).max(top);
    Rect::new(area.x, top, area.width, bottom - top)
}

pub fn render(frame: &mut Frame, state: &mut PickerState, label: &str) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    if area.height == 0 {
        return;
    }

    let header = Line::from(Span::styled(label, Style::default().bold()));
    frame.render_widget(header, Rect::new(area.x, area.y, area.width, 1));

    let list = list_area(area);
    state.scroll = compute_scroll(state.cursor, list.height as usize, state.scroll);
    render_list(frame, list, &state.items, state.cursor, state.scroll);

    if let Some(name) = state.pending_delete() {
        render_delete_banner(frame, area, name);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use ratatui::buffer::Buffer;

    /// Row `y` as plain text, trailing blanks trimmed.
    pub fn row_text(buf: &Buffer, y: u16) -> String {
        let mut line = String::new();
        for x in 0..buf.area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        line.trim_end().to_string()
    }
}
