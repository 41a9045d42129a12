//! Detail screen: the full profile for one character.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use citadel_core::CharacterProfile;

use crate::action::Action;
use crate::theme;
use crate::view::View;
use crate::widgets::status_badge;

pub struct DetailScreen {
    focused: bool,
    /// Id of the character being fetched, kept for the loading label
    /// and the fallback title.
    requested_id: Option<u64>,
    /// `None` until a profile arrives; the panel stays hidden while a
    /// fetch runs or after one fails.
    profile: Option<Arc<CharacterProfile>>,
    loading: bool,
    throbber_state: throbber_widgets_tui::ThrobberState,
    error: Option<String>,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            requested_id: None,
            profile: None,
            loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            error: None,
        }
    }

    fn title(&self) -> String {
        match (&self.profile, self.requested_id) {
            (Some(profile), _) => format!(" {} ", profile.name),
            (None, Some(id)) => format!(" Character {id} "),
            (None, None) => " Character ".to_owned(),
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        if self.loading {
            let label = self.requested_id.map_or_else(
                || "Loading character...".to_owned(),
                |id| format!("Loading character {id}..."),
            );
            let throbber = throbber_widgets_tui::Throbber::default()
                .label(label)
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

    fn render_profile(frame: &mut Frame, area: Rect, profile: &CharacterProfile) {
        let portrait = profile
            .image
            .as_ref()
            .map_or_else(|| "─".to_owned(), |url| url.as_str().to_owned());

        let lines = vec![
            Line::from(Span::styled(
                format!("  {}", profile.name),
                Style::default()
                    .fg(theme::MEESEEKS_BLUE)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field_line(
                "Id",
                vec![Span::styled(
                    profile.id.to_string(),
                    Style::default().fg(theme::MORTY_YELLOW),
                )],
            ),
            field_line("Status", status_badge::badge_spans(&profile.status)),
            field_line("Species", text_value(&profile.species)),
            field_line("Gender", text_value(&profile.gender)),
            field_line("Location", text_value(&profile.location)),
            field_line(
                "Portrait",
                vec![Span::styled(
                    portrait,
                    Style::default().fg(theme::BORDER_DIM),
                )],
            ),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// One labelled row of the profile panel.
fn field_line(label: &str, mut value: Vec<Span<'static>>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("  {label:<12}"),
        Style::default().fg(theme::TEXT_DIM),
    )];
    spans.append(&mut value);
    Line::from(spans)
}

fn text_value(value: &str) -> Vec<Span<'static>> {
    vec![Span::styled(
        value.to_owned(),
        Style::default().fg(theme::MEESEEKS_BLUE),
    )]
}

impl View for DetailScreen {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        // Navigation back out of the detail view is a global key.
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::DetailLoading { id } => {
                self.requested_id = Some(*id);
                self.profile = None;
                self.loading = true;
                self.error = None;
            }
            Action::DetailLoaded { profile, .. } => {
                self.loading = false;
                self.error = None;
                self.profile = Some(Arc::clone(profile));
            }
            Action::DetailFailed { message, .. } => {
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
        let block = Block::default()
            .title(self.title())
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
            Constraint::Min(1),    // profile panel
            Constraint::Length(1), // key hints
        ])
        .split(inner);

        self.render_status_line(frame, layout[0]);
        if let Some(ref profile) = self.profile {
            Self::render_profile(frame, layout[1], profile);
        }

        let hints = Line::from(vec![
            Span::styled("  Esc ", theme::hint_key()),
            Span::styled("back  ", theme::hint()),
            Span::styled("r ", theme::hint_key()),
            Span::styled("reload", theme::hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[2]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.loading = false;
        }
    }

    fn name(&self) -> &str {
        "detail"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use citadel_core::Generation;
    use pretty_assertions::assert_eq;

    fn profile(id: u64, name: &str) -> Arc<CharacterProfile> {
        Arc::new(CharacterProfile {
            id,
            name: name.to_owned(),
            species: "Human".to_owned(),
            gender: "Male".to_owned(),
            status: "Alive".to_owned(),
            image: None,
            location: "Citadel of Ricks".to_owned(),
        })
    }

    #[test]
    fn loading_hides_the_previous_profile() {
        let mut screen = DetailScreen::new();
        let mut generation = Generation::new();
        screen
            .update(&Action::DetailLoaded {
                token: generation.advance(),
                profile: profile(1, "Rick Sanchez"),
            })
            .unwrap();

        screen.update(&Action::DetailLoading { id: 183 }).unwrap();

        assert!(screen.loading);
        assert_eq!(screen.profile, None);
        assert_eq!(screen.requested_id, Some(183));
        assert_eq!(screen.error, None);
    }

    #[test]
    fn failure_keeps_the_panel_hidden_and_shows_the_message() {
        let mut screen = DetailScreen::new();
        let mut generation = Generation::new();
        screen.update(&Action::DetailLoading { id: 9999 }).unwrap();
        screen
            .update(&Action::DetailFailed {
                token: generation.advance(),
                message: "Character not found".to_owned(),
            })
            .unwrap();

        assert!(!screen.loading);
        assert_eq!(screen.profile, None);
        assert_eq!(screen.error.as_deref(), Some("Character not found"));
    }

    #[test]
    fn success_reveals_the_profile() {
        let mut screen = DetailScreen::new();
        let mut generation = Generation::new();
        screen.update(&Action::DetailLoading { id: 183 }).unwrap();
        screen
            .update(&Action::DetailLoaded {
                token: generation.advance(),
                profile: profile(183, "Johnny Depp"),
            })
            .unwrap();

        assert!(!screen.loading);
        assert_eq!(screen.error, None);
        let loaded = screen.profile.unwrap();
        assert_eq!(loaded.name, "Johnny Depp");
    }
}
