//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::input::SHORTCUTS;
use super::keypad::KeypadWidget;
use crate::core::ERROR_TEXT;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Where the keypad is drawn inside a frame of the given size
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    horizontal_layout(area)[1]
}

fn horizontal_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(30),    // display, history, status
            Constraint::Length(32), // keypad
            Constraint::Length(24), // help
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // pending + display
                Constraint::Min(5),    // history
                Constraint::Length(3), // status
            ])
            .split(area)
            .to_vec()
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.display();

        let mut style = if display == ERROR_TEXT {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        }
        .add_modifier(Modifier::BOLD);
        if self.app.display_pulse() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let title = if self.app.memory_indicator() {
            " Display [M] "
        } else {
            " Display "
        };

        let lines = vec![
            Line::from(Span::styled(
                self.app.pending_display(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(display.to_string(), style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .accumulator()
            .history()
            .iter()
            .map(|entry| {
                let result_style = if entry.result.is_some() {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Red)
                };
                let result = entry
                    .result
                    .map_or_else(|| ERROR_TEXT.to_string(), crate::core::format_number);
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.as_str(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(result, result_style),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" History (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let status = self.app.status_line();
        let style = if status.starts_with('✗') {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };

        Paragraph::new(Span::styled(status, style))
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let shortcut_help: Vec<(String, &str)> = SHORTCUTS
            .iter()
            .map(|(key, _, desc)| (key.to_string(), *desc))
            .collect();

        let items: Vec<ListItem> = HELP_KEYS
            .iter()
            .map(|(key, desc)| ((*key).to_string(), *desc))
            .chain(shortcut_help)
            .chain(HELP_CONTROL.iter().map(|(key, desc)| ((*key).to_string(), *desc)))
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = horizontal_layout(area);
        if h_chunks.len() < 3 {
            return;
        }

        let chunks = self.create_layout(h_chunks[0]);
        if chunks.len() >= 3 {
            self.render_display(chunks[0], buf);
            self.render_history(chunks[1], buf);
            self.render_status(chunks[2], buf);
        }

        KeypadWidget::new(self.app.keypad()).render(h_chunks[1], buf);
        self.render_help(h_chunks[2], buf);
    }
}

/// Title of the main frame
pub const TITLE: &str = " pocket-calc ";

/// Keys shared with the web page
pub const HELP_KEYS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+-*/", "Operators"),
    ("Enter", "Equals"),
    ("Esc", "Clear"),
    ("Bksp", "Backspace"),
    ("%", "Percent"),
];

/// Terminal control keys
pub const HELP_CONTROL: &[(&str, &str)] = &[("Ctrl+L", "Clear history"), ("q", "Quit")];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Event, MemoryAction, Operator};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &CalculatorApp) -> String {
        let backend = TestBackend::new(100, 26);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn press_all(app: &mut CalculatorApp, events: &[Event]) {
        for event in events {
            app.handle_event(*event);
        }
    }

    #[test]
    fn test_create_layout() {
        let app = CalculatorApp::new();
        let ui = CalculatorUI::new(&app);
        assert_eq!(ui.create_layout(Rect::new(0, 0, 40, 20)).len(), 3);
    }

    #[test]
    fn test_keypad_area_width() {
        let area = keypad_area(Rect::new(0, 0, 100, 26));
        assert!(area.width >= 32);
        assert_eq!(area.height, 24);
    }

    #[test]
    fn test_render_initial() {
        let content = draw(&CalculatorApp::new());
        assert!(content.contains("pocket-calc"));
        assert!(content.contains("Display"));
        assert!(content.contains("Ready"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("Help"));
    }

    #[test]
    fn test_render_pending_and_display() {
        let mut app = CalculatorApp::new();
        press_all(
            &mut app,
            &[Event::Digit(4), Event::Digit(2), Event::Operator(Operator::Multiply)],
        );
        let content = draw(&app);
        assert!(content.contains("42 ×"));
    }

    #[test]
    fn test_render_history() {
        let mut app = CalculatorApp::new();
        press_all(
            &mut app,
            &[
                Event::Digit(6),
                Event::Operator(Operator::Multiply),
                Event::Digit(7),
                Event::Equals,
            ],
        );
        let content = draw(&app);
        assert!(content.contains("6 × 7 = 42"));
    }

    #[test]
    fn test_render_error() {
        let mut app = CalculatorApp::new();
        press_all(
            &mut app,
            &[
                Event::Digit(1),
                Event::Operator(Operator::Divide),
                Event::Digit(0),
                Event::Equals,
            ],
        );
        let content = draw(&app);
        assert!(content.contains("Error"));
        assert!(content.contains("Division by zero"));
    }

    #[test]
    fn test_render_memory_indicator() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &[Event::Digit(5), Event::Memory(MemoryAction::Add)]);
        let content = draw(&app);
        assert!(content.contains("Display [M]"));
    }

    #[test]
    fn test_render_tiny_terminal() {
        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(&CalculatorApp::new(), frame))
            .unwrap();
    }
}
