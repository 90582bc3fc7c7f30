//! Disease input form: one labeled entry per schema field.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::{fields_for, Disease, FieldKind, FieldSpec, InputValues};
use crate::tui::styles::MedicalTheme;
use crate::{MedscreenError, Result};

/// Demonstration row per disease, in schema order.
fn sample_values(disease: Disease) -> &'static [f64] {
    match disease {
        Disease::Diabetes => &[2.0, 120.0, 70.0, 20.0, 79.0, 25.0, 0.5, 30.0],
        Disease::HeartDisease => &[
            63.0, 1.0, 3.0, 145.0, 233.0, 1.0, 0.0, 150.0, 0.0, 2.3, 0.0, 0.0, 1.0,
        ],
        Disease::Parkinsons => &[
            119.992, 157.302, 74.997, 0.00784, 0.00007, 0.0037, 0.00554, 0.01109, 0.04374,
            0.426, 0.02182, 0.0313, 0.02971, 0.06545, 0.02211, 21.033, 0.414783, 0.815285,
            -4.813031, 0.266482, 2.301442, 0.284654,
        ],
        Disease::LungCancer => &[
            1.0, 69.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        ],
        Disease::Thyroid => &[41.0, 0.0, 0.0, 1.3, 1.0, 2.5, 125.0],
    }
}

/// Entry buffers for the selected disease's form.
///
/// Buffers hold raw text; nothing is parsed until `collect`.
pub struct FormState {
    pub disease: Disease,
    pub fields: &'static [FieldSpec],
    pub buffers: Vec<String>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl FormState {
    #[must_use]
    pub fn new(disease: Disease) -> Self {
        let fields = fields_for(disease);
        Self {
            disease,
            fields,
            buffers: vec![String::new(); fields.len()],
            selected_field: 0,
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Type into the current field. Numeric fields drop anything that
    /// cannot be part of a decimal number.
    pub fn input_char(&mut self, c: char) {
        let kind = self.fields[self.selected_field].kind;
        let buffer = &mut self.buffers[self.selected_field];
        let accepted = match kind {
            FieldKind::Numeric => {
                c.is_ascii_digit()
                    || (c == '.' && !buffer.contains('.'))
                    || (c == '-' && buffer.is_empty())
            }
            FieldKind::Text => !c.is_control(),
        };
        if accepted {
            buffer.push(c);
            self.error_message = None;
        }
    }

    pub fn delete_char(&mut self) {
        self.buffers[self.selected_field].pop();
    }

    pub fn clear_field(&mut self) {
        self.buffers[self.selected_field].zeroize();
    }

    /// Numeric stepper: add `delta` to the current value (empty counts as 0).
    pub fn step(&mut self, delta: f64) {
        if self.fields[self.selected_field].kind != FieldKind::Numeric {
            return;
        }
        let buffer = &mut self.buffers[self.selected_field];
        let current = if buffer.is_empty() {
            0.0
        } else {
            match buffer.parse::<f64>() {
                Ok(v) => v,
                Err(_) => return,
            }
        };
        // Keep the precision the user typed so 1.1 - 1 reads 0.1.
        let decimals = buffer
            .split_once('.')
            .map_or(0, |(_, frac)| frac.len().min(15));
        let scale = 10f64.powi(decimals as i32);
        let stepped = ((current + delta) * scale).round() / scale + 0.0;
        *buffer = format!("{stepped:.decimals$}");
        self.error_message = None;
    }

    /// Fill every field with a demonstration row.
    pub fn load_sample(&mut self) {
        for (buffer, value) in self.buffers.iter_mut().zip(sample_values(self.disease)) {
            *buffer = value.to_string();
        }
        self.error_message = None;
    }

    /// Read the buffers into `InputValues`. Empty fields stay unset.
    ///
    /// # Errors
    /// Returns `MedscreenError::InputCoercion` naming the first field whose
    /// text is not a finite number.
    pub fn collect(&self) -> Result<InputValues> {
        let mut values = InputValues::new();
        for (field, buffer) in self.fields.iter().zip(&self.buffers) {
            let text = buffer.trim();
            if text.is_empty() {
                continue;
            }
            match text.parse::<f64>() {
                Ok(v) if v.is_finite() => values.set(field.key, v),
                _ => {
                    return Err(MedscreenError::InputCoercion {
                        field: field.label.to_string(),
                    })
                }
            }
        }
        Ok(values)
    }

    /// Wipe all buffers and return to the first field.
    pub fn clear_sensitive(&mut self) {
        for buffer in &mut self.buffers {
            buffer.zeroize();
        }
        self.error_message = None;
        self.selected_field = 0;
    }
}

/// Render the form for the current disease.
pub fn render_form(f: &mut Frame, area: Rect, state: &FormState, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Fields
            Constraint::Length(1), // Submit
            Constraint::Length(2), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0], state.disease);
    render_form_fields(f, chunks[1], state, focused);
    render_submit(f, chunks[2], state.disease, focused);
    render_form_footer(f, chunks[3], state);
}

fn render_form_header(f: &mut Frame, area: Rect, disease: Disease) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(disease.page_title(), MedicalTheme::title())),
        Line::from(Span::styled(
            "Enter details below:",
            MedicalTheme::text_secondary(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

/// Diabetes always gets two columns; long forms spill into up to three.
fn column_count(disease: Disease, fields: usize, rows: usize) -> usize {
    let min = if disease == Disease::Diabetes { 2 } else { 1 };
    fields.div_ceil(rows.max(1)).clamp(min, 3)
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &FormState, focused: bool) {
    let n = state.fields.len();
    let cols = column_count(state.disease, n, area.height as usize);
    let per_column = n.div_ceil(cols);

    let constraints: Vec<Constraint> = (0..cols)
        .map(|_| Constraint::Ratio(1, cols as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (col, area) in columns.iter().enumerate() {
        let start = col * per_column;
        let end = (start + per_column).min(n);
        let lines: Vec<Line> = (start..end)
            .map(|i| field_line(state, i, focused && i == state.selected_field))
            .collect();
        f.render_widget(Paragraph::new(lines), *area);
    }
}

fn field_line(state: &FormState, index: usize, is_selected: bool) -> Line<'_> {
    let field = &state.fields[index];
    let buffer = &state.buffers[index];

    let label_style = if is_selected {
        MedicalTheme::focused()
    } else {
        MedicalTheme::text_secondary()
    };
    let value = if buffer.is_empty() {
        Span::styled(" 0 ", MedicalTheme::text_muted())
    } else {
        Span::styled(format!(" {buffer} "), MedicalTheme::input())
    };

    Line::from(vec![
        Span::styled(if is_selected { "› " } else { "  " }, label_style),
        Span::styled(format!("{}: ", field.label), label_style),
        value,
        if is_selected {
            Span::styled("▌", MedicalTheme::cursor())
        } else {
            Span::raw("")
        },
    ])
}

fn render_submit(f: &mut Frame, area: Rect, disease: Disease, focused: bool) {
    let style = if focused {
        MedicalTheme::button()
    } else {
        MedicalTheme::text_muted()
    };
    let button = Paragraph::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" {} ", disease.submit_caption()), style),
        Span::styled("  [Enter]", MedicalTheme::key_hint()),
    ]));
    f.render_widget(button, area);
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &FormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", MedicalTheme::danger()),
            Span::styled(err.clone(), MedicalTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", MedicalTheme::key_hint()),
            Span::styled("Field ", MedicalTheme::key_desc()),
            Span::styled("[←→] ", MedicalTheme::key_hint()),
            Span::styled("-1/+1 ", MedicalTheme::key_desc()),
            Span::styled("[F2] ", MedicalTheme::key_hint()),
            Span::styled("Sample ", MedicalTheme::key_desc()),
            Span::styled("[Del] ", MedicalTheme::key_hint()),
            Span::styled("Clear ", MedicalTheme::key_desc()),
            Span::styled("[Esc] ", MedicalTheme::key_hint()),
            Span::styled("Menu", MedicalTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}

/// Single free-text field keyed like the first diabetes column.
#[cfg(test)]
static TEXT_FIELDS: [FieldSpec; 1] = [FieldSpec {
    label: "Free Text Reading",
    key: "Pregnancies",
    kind: FieldKind::Text,
}];

#[cfg(test)]
pub(crate) fn text_form() -> FormState {
    let mut form = FormState::new(Disease::Diabetes);
    form.fields = &TEXT_FIELDS;
    form.buffers = vec![String::new()];
    form
}
