//! Disease selector.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::domain::Disease;
use crate::tui::styles::MedicalTheme;

pub fn render_sidebar(f: &mut Frame, area: Rect, selected: Disease, focused: bool) {
    let items: Vec<ListItem> = Disease::ALL
        .iter()
        .enumerate()
        .map(|(i, disease)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), MedicalTheme::key_hint()),
                Span::raw(disease.menu_title()),
            ]))
        })
        .collect();

    let border_style = if focused {
        MedicalTheme::border_focused()
    } else {
        MedicalTheme::border()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(" Disease Prediction ", MedicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .style(MedicalTheme::text())
        .highlight_style(MedicalTheme::selected())
        .highlight_symbol("▸");

    let mut state = ListState::default().with_selected(Some(selected as usize));
    f.render_stateful_widget(list, area, &mut state);
}
