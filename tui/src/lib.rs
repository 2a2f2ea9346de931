//! TUI rendering for pinpad using ratatui.

mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use pinpad_engine::App;
use pinpad_types::{RenderMode, SlotValue};

/// Rendering options resolved from config at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
}

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;
const CELL_GAP: u16 = 1;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App, options: UiOptions) {
    let palette = palette();
    let glyphs = glyphs(options.ascii_only);

    let bg = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg, frame.area());

    // Title, the cell row, the submit affordance, and a hint line,
    // stacked in a centered column.
    let column_height = 2 + CELL_HEIGHT + 2 + 1;
    let area = centered_area(frame.area(), column_height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Title
            Constraint::Length(CELL_HEIGHT), // Code row
            Constraint::Length(2),           // Submit
            Constraint::Length(1),           // Hints
        ])
        .split(area);

    draw_title(frame, chunks[0], &palette);
    draw_row(frame, chunks[1], app, &palette, glyphs);
    draw_submit(frame, chunks[2], app, &palette);
    draw_hints(frame, chunks[3], &palette);
}

fn draw_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Enter verification code",
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, glyphs: Glyphs) {
    let len = app.row().len() as u16;
    let row_width = len * CELL_WIDTH + len.saturating_sub(1) * CELL_GAP;
    let x = area.x + area.width.saturating_sub(row_width) / 2;

    let modes = app.render_modes();
    for (i, (&value, &mode)) in app.row().values().iter().zip(modes.iter()).enumerate() {
        let cell = Rect {
            x: x + (i as u16) * (CELL_WIDTH + CELL_GAP),
            y: area.y,
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
        };
        if cell.right() > area.right() {
            break; // terminal too narrow; drop cells rather than wrap
        }

        let focused = app.focused_slot() == Some(i);
        draw_cell(frame, cell, value, mode, focused, palette, glyphs);
    }
}

fn draw_cell(
    frame: &mut Frame,
    cell: Rect,
    value: SlotValue,
    mode: RenderMode,
    focused: bool,
    palette: &Palette,
    glyphs: Glyphs,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.cell_border(focused))
        .style(Style::default().bg(palette.bg_panel));

    let content = match (value, mode) {
        (SlotValue::Digit(c), RenderMode::Clear) => {
            Span::styled(c.to_string(), palette.digit())
        }
        (SlotValue::Digit(_), RenderMode::Masked) => {
            Span::styled(glyphs.mask.to_owned(), palette.masked())
        }
        (SlotValue::Empty, _) if focused => {
            Span::styled(glyphs.caret.to_owned(), palette.masked())
        }
        (SlotValue::Empty, _) => Span::raw(" "),
    };

    let paragraph = Paragraph::new(Line::from(content))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, cell);
}

fn draw_submit(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let style = if app.submit_focused() {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else if app.is_complete() {
        Style::default().fg(palette.success)
    } else {
        Style::default().fg(palette.text_muted)
    };

    let label = if app.is_complete() {
        "[ Submit ]"
    } else {
        "[ Submit (code incomplete) ]"
    };
    let submit = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center);
    // Bottom-align within the 2-row chunk to leave a blank spacer line.
    let bottom = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };
    frame.render_widget(submit, bottom);
}

fn draw_hints(frame: &mut Frame, area: Rect, palette: &Palette) {
    let hints = Paragraph::new(Line::from(Span::styled(
        "0-9 type · backspace erase · tab/arrows move · enter submit · esc quit",
        palette.hint(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}

/// Center a fixed-height column in the terminal, full width.
fn centered_area(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    Rect {
        x: area.x,
        y,
        width: area.width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::centered_area;
    use ratatui::layout::Rect;

    #[test]
    fn centered_area_fits_small_terminals() {
        let tiny = Rect::new(0, 0, 20, 4);
        let area = centered_area(tiny, 8);
        assert!(area.height <= tiny.height);
        assert!(area.bottom() <= tiny.bottom());
    }

    #[test]
    fn centered_area_centers_vertically() {
        let term = Rect::new(0, 0, 80, 24);
        let area = centered_area(term, 8);
        assert_eq!(area.y, 8);
        assert_eq!(area.height, 8);
        assert_eq!(area.width, 80);
    }
}
