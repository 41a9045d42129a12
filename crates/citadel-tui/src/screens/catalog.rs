//! Catalog screen: the paginated character grid.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use citadel_core::Character;
use url::Url;

use crate::action::Action;
use crate::theme;
use crate::view::View;
use crate::widgets::status_badge;

pub struct CatalogScreen {
    focused: bool,
    /// Rows in server order. Kept across a failed page change.
    characters: Arc<Vec<Character>>,
    selected: usize,
    /// `(current, total)` once a page has loaded; `None` while the
    /// pagination control is hidden (loading, or after a failure).
    page: Option<(u32, u32)>,
    loading: bool,
    throbber_state: throbber_widgets_tui::ThrobberState,
    error: Option<String>,
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            characters: Arc::new(Vec::new()),
            selected: 0,
            page: None,
            loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            error: None,
        }
    }

    fn selected_character(&self) -> Option<&Character> {
        self.characters.get(self.selected)
    }

    fn move_down(&mut self, step: usize) {
        if self.characters.is_empty() {
            return;
        }
        self.selected = (self.selected + step).min(self.characters.len() - 1);
    }

    fn move_up(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    /// "Previous" is live only when a page is showing and we are past
    /// page 1; a disabled control emits nothing.
    fn request_prev_page(&self) -> Option<Action> {
        let (current, _) = self.page?;
        (current > 1).then(|| Action::RequestPage(current - 1))
    }

    /// "Next" is live only below the last page.
    fn request_next_page(&self) -> Option<Action> {
        let (current, total) = self.page?;
        (current < total).then(|| Action::RequestPage(current + 1))
    }

    /// Loading throbber while a fetch runs, otherwise the error
    /// surface (if any).
    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        if self.loading {
            let throbber = throbber_widgets_tui::Throbber::default()
                .label("Loading characters...")
                .style(Style::default().fg(theme::MEESEEKS_BLUE))
                .throbber_style(Style::default().fg(theme::PORTAL_GREEN));
            frame.render_stateful_widget(throbber, area, &mut self.throbber_state.clone());
        } else if let Some(ref message) = self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(format!("  {message}"), theme::error_text())),
                area,
            );
        }
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new(vec![
            Cell::from("Status").style(theme::grid_header()),
            Cell::from("Name").style(theme::grid_header()),
            Cell::from("Species").style(theme::grid_header()),
            Cell::from("Portrait").style(theme::grid_header()),
        ]);

        let rows: Vec<Row> = self
            .characters
            .iter()
            .enumerate()
            .map(|(i, character)| {
                let is_selected = i == self.selected;
                let prefix = if is_selected { "▸ " } else { "  " };

                let mut status = vec![Span::raw(prefix)];
                status.extend(status_badge::badge_spans(&character.status));

                let portrait = character.image.as_ref().map_or("─", Url::as_str);

                let row_style = if is_selected {
                    theme::grid_selected()
                } else {
                    theme::grid_row()
                };

                Row::new(vec![
                    Cell::from(Line::from(status)),
                    Cell::from(character.name.as_str()).style(
                        Style::default()
                            .fg(theme::MEESEEKS_BLUE)
                            .add_modifier(if is_selected {
                                Modifier::BOLD
                            } else {
                                Modifier::empty()
                            }),
                    ),
                    Cell::from(character.species.as_str()),
                    Cell::from(portrait).style(Style::default().fg(theme::BORDER_DIM)),
                ])
                .style(row_style)
            })
            .collect();

        let widths = [
            Constraint::Length(11),
            Constraint::Min(18),
            Constraint::Length(16),
            Constraint::Min(28),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::grid_selected());

        let mut table_state = TableState::default();
        table_state.select(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    /// "◂ prev  page X of Y  next ▸", with the arrow dimmed on a
    /// disabled side. Hidden entirely until a page has loaded.
    fn render_pagination(&self, frame: &mut Frame, area: Rect) {
        let Some((current, total)) = self.page else {
            return;
        };

        let prev_style = if current > 1 {
            theme::hint_key()
        } else {
            theme::hint()
        };
        let next_style = if current < total {
            theme::hint_key()
        } else {
            theme::hint()
        };

        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled("◂ prev", prev_style),
            Span::styled("  page ", theme::grid_row()),
            Span::styled(current.to_string(), Style::default().fg(theme::MORTY_YELLOW)),
            Span::styled(" of ", theme::grid_row()),
            Span::styled(total.to_string(), Style::default().fg(theme::MORTY_YELLOW)),
            Span::styled("  next ▸", next_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl View for CatalogScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_down(1);
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_up(1);
                Ok(None)
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_down(10);
                Ok(None)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_up(10);
                Ok(None)
            }
            KeyCode::Char('g') => {
                self.selected = 0;
                Ok(None)
            }
            KeyCode::Char('G') => {
                if !self.characters.is_empty() {
                    self.selected = self.characters.len() - 1;
                }
                Ok(None)
            }
            // A card click in browser terms: set the fragment and let
            // the app react to the change.
            KeyCode::Enter => Ok(self
                .selected_character()
                .map(|character| Action::Navigate(format!("#{}", character.id)))),
            KeyCode::Char('h') | KeyCode::Left => Ok(self.request_prev_page()),
            KeyCode::Char('l') | KeyCode::Right => Ok(self.request_next_page()),
            _ => Ok(None),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.move_down(1),
            MouseEventKind::ScrollUp => self.move_up(1),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::CatalogLoading => {
                self.loading = true;
                self.error = None;
                self.page = None;
            }
            Action::CatalogLoaded {
                page,
                total_pages,
                characters,
                ..
            } => {
                self.loading = false;
                self.error = None;
                self.characters = Arc::clone(characters);
                self.page = Some((*page, *total_pages));
                // The viewport scrolls back to the top on a page change.
                self.selected = 0;
            }
            Action::CatalogFailed { message, .. } => {
                // Rows from the previous page stay up; only the error
                // surface changes.
                self.loading = false;
                self.error = Some(message.clone());
            }
            Action::Tick => {
                if self.loading {
                    self.throbber_state.calc_next();
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" Characters ({}) ", self.characters.len());
        let block = Block::default()
            .title(title)
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_active()
            } else {
                theme::border_idle()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(1), // loading / error line
            Constraint::Min(1),    // character table
            Constraint::Length(1), // pagination
            Constraint::Length(1), // key hints
        ])
        .split(inner);

        self.render_status_line(frame, layout[0]);
        self.render_table(frame, layout[1]);
        self.render_pagination(frame, layout[2]);

        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::hint_key()),
            Span::styled("move  ", theme::hint()),
            Span::styled("Enter ", theme::hint_key()),
            Span::styled("open  ", theme::hint()),
            Span::styled("h/l ", theme::hint_key()),
            Span::styled("page  ", theme::hint()),
            Span::styled("r ", theme::hint_key()),
            Span::styled("reload", theme::hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[3]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            // Leaving the catalog supersedes any fetch it had in
            // flight; the spinner must not survive the round trip.
            self.loading = false;
        }
    }

    fn name(&self) -> &str {
        "catalog"
    }
}
