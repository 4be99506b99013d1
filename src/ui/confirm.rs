// Delete confirmation banner on the second-to-last row.

use ratatui::{
    prelude::*,
    widgets::{Clear, Paragraph},
};

pub fn delete_prompt(name: &str) -> String {
    format!("Delete workspace {} (y/n)? ", name)
}

pub fn render_delete_banner(frame: &mut Frame, area: Rect, name: &str) {
    if area.height < 2 {
        return;
    }
    let row = Rect::new(area.x, area.bottom() - 2, area.width, 1);
    let style = Style::default().fg(Color::Black).bg(Color::Red);

    frame.render_widget(Clear, row);
    let line = Line::from(vec![Span::raw(" "), Span::raw(delete_prompt(name))]);
    frame.render_widget(Paragraph::new(line).style(style), row);
}
