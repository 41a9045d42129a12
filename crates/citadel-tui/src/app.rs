//! Application orchestrator: event loop, routing, and fetch lifecycle.
//!
//! All navigation funnels through the fragment in [`Location`]. A key
//! press becomes an [`Action`], the action may change the fragment, the
//! changed fragment is decoded into a route, and the route decides
//! which screen is active and whether a fetch starts. Fetch completions
//! come back through the same action channel, stamped with the token of
//! the generation that started them; a completion whose token is no
//! longer current is dropped before any screen sees it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use citadel_core::{CatalogService, Generation, Location, PageState, Route, Router, Transition};

use crate::action::Action;
use crate::event::{Event, Events};
use crate::fetch;
use crate::screen::ScreenId;
use crate::screens;
use crate::theme;
use crate::tui::Tui;
use crate::view::View;

const TICK_RATE: Duration = Duration::from_millis(250);
const RENDER_RATE: Duration = Duration::from_millis(33);

pub struct App {
    location: Location,
    router: Router,
    page_state: PageState,
    generation: Generation,
    service: Arc<CatalogService>,
    /// Host shown in the status bar next to the fragment.
    api_host: String,
    active_screen: ScreenId,
    screens: HashMap<ScreenId, Box<dyn View>>,
    running: bool,
    help_visible: bool,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(service: CatalogService, initial_fragment: Option<String>, api_host: String) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let location = initial_fragment.map_or_else(Location::new, Location::with_fragment);
        Self {
            location,
            router: Router::new(),
            page_state: PageState::default(),
            generation: Generation::new(),
            service: Arc::new(service),
            api_host,
            active_screen: ScreenId::Catalog,
            screens: HashMap::new(),
            running: true,
            help_visible: false,
            action_tx,
            action_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        self.init_screens()?;
        // Resolve the starting fragment before the first frame, so a
        // deep link opens directly on the detail view.
        self.apply_route();

        let mut events = Events::new(TICK_RATE, RENDER_RATE);
        while self.running {
            if let Some(event) = events.next().await {
                self.handle_event(event)?;
            }
            while let Ok(action) = self.action_rx.try_recv() {
                if matches!(action, Action::Render) {
                    self.render(&mut tui)?;
                } else {
                    self.process_action(&action)?;
                }
            }
        }

        events.stop();
        tui.exit();
        Ok(())
    }

    fn init_screens(&mut self) -> Result<()> {
        for (id, mut screen) in screens::create_screens() {
            screen.init(self.action_tx.clone())?;
            self.screens.insert(id, screen);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let action = match event {
            Event::Key(key) => self.handle_key_event(key)?,
            Event::Mouse(mouse) => self.handle_mouse_event(mouse)?,
            Event::Resize(width, height) => Some(Action::Resize(width, height)),
            Event::Tick => Some(Action::Tick),
            Event::Render => Some(Action::Render),
        };
        if let Some(action) = action {
            self.action_tx.send(action)?;
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // The help overlay swallows every key except its dismissals.
        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Ok(Some(Action::Quit)),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                Ok(Some(Action::ToggleHelp))
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => Ok(Some(Action::Reload)),
            (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Backspace) => {
                Ok(Some(Action::NavigateBack))
            }
            _ => self
                .screens
                .get_mut(&self.active_screen)
                .map_or(Ok(None), |screen| screen.handle_key_event(key)),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.help_visible {
            return Ok(None);
        }
        self.screens
            .get_mut(&self.active_screen)
            .map_or(Ok(None), |screen| screen.handle_mouse_event(mouse))
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                info!("quit requested");
                self.running = false;
            }
            Action::Render => {
                // Drawn inline in the run loop, where the terminal lives.
            }
            Action::Resize(width, height) => {
                debug!(width, height, "terminal resized");
            }
            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }
            Action::Navigate(fragment) => {
                // Setting the fragment to its current value is not a
                // navigation event.
                if self.location.set(fragment.clone()) {
                    self.apply_route();
                }
            }
            Action::NavigateBack => self.navigate_back(),
            Action::RequestPage(page) => {
                if self.page_state.accepts(*page) {
                    self.start_catalog_fetch(*page);
                } else {
                    debug!(page, "requested page outside bounds, ignoring");
                }
            }
            Action::Reload => self.reload(),
            Action::CatalogLoaded {
                token,
                page,
                total_pages,
                ..
            } => {
                if self.generation.is_current(*token) {
                    self.page_state.apply(*page, *total_pages);
                    self.forward_to_active(action)?;
                } else {
                    debug!(page, "discarding stale catalog page");
                }
            }
            Action::CatalogFailed { token, .. } => {
                if self.generation.is_current(*token) {
                    self.forward_to_active(action)?;
                } else {
                    debug!("discarding stale catalog failure");
                }
            }
            Action::DetailLoaded { token, .. } => {
                if self.generation.is_current(*token) {
                    self.forward_to_active(action)?;
                } else {
                    debug!("discarding stale profile");
                }
            }
            Action::DetailFailed { token, .. } => {
                if self.generation.is_current(*token) {
                    self.forward_to_active(action)?;
                } else {
                    debug!("discarding stale profile failure");
                }
            }
            _ => self.forward_to_active(action)?,
        }
        Ok(())
    }

    /// Decode the current fragment and make the UI match it.
    fn apply_route(&mut self) {
        let route = Route::parse(self.location.fragment());
        // A junk fragment decodes to the catalog; normalize what the
        // status bar shows without recording the junk in history.
        if route == Route::Catalog && !self.location.fragment().is_empty() {
            self.location.replace("");
        }

        match self.router.navigate(route) {
            Transition::ShowCatalog { fetch_first_page } => {
                self.switch_screen(ScreenId::Catalog);
                if fetch_first_page {
                    self.start_catalog_fetch(1);
                }
            }
            Transition::ShowDetail { id } => {
                self.switch_screen(ScreenId::Detail);
                self.start_detail_fetch(id);
            }
        }
    }

    fn navigate_back(&mut self) {
        if self.location.back().is_some() {
            self.apply_route();
        } else if !self.location.fragment().is_empty() {
            // A deep-link start has no history to pop; back falls out
            // to the catalog instead of doing nothing.
            self.location.replace("");
            self.apply_route();
        }
    }

    fn reload(&mut self) {
        match Route::parse(self.location.fragment()) {
            Route::Catalog => self.start_catalog_fetch(self.page_state.current()),
            Route::Detail(id) => self.start_detail_fetch(id),
        }
    }

    fn start_catalog_fetch(&mut self, page: u32) {
        let token = self.generation.advance();
        debug!(page, "starting catalog fetch");
        let _ = self.action_tx.send(Action::CatalogLoading);
        fetch::spawn_page_fetch(Arc::clone(&self.service), page, token, self.action_tx.clone());
    }

    fn start_detail_fetch(&mut self, id: u64) {
        let token = self.generation.advance();
        debug!(id, "starting profile fetch");
        let _ = self.action_tx.send(Action::DetailLoading { id });
        fetch::spawn_profile_fetch(Arc::clone(&self.service), id, token, self.action_tx.clone());
    }

    fn switch_screen(&mut self, next: ScreenId) {
        if let Some(current) = self.screens.get_mut(&self.active_screen) {
            current.set_focused(false);
        }
        debug!(from = %self.active_screen, to = %next, "switching view");
        self.active_screen = next;
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
    }

    fn forward_to_active(&mut self, action: &Action) -> Result<()> {
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            if let Some(follow_up) = screen.update(action)? {
                self.action_tx.send(follow_up)?;
            }
        }
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        tui.draw(|frame| {
            let area = frame.area();
            let layout =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

            if let Some(screen) = self.screens.get(&self.active_screen) {
                screen.render(frame, layout[0]);
            }
            self.render_status_bar(frame, layout[1]);

            if self.help_visible {
                Self::render_help_overlay(frame, area);
            }
        })?;
        Ok(())
    }

    /// Bottom line: app name, current fragment (the catalog shows a
    /// bare `#`), the API host, and the global key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let fragment = if self.location.fragment().is_empty() {
            "#"
        } else {
            self.location.fragment()
        };
        let line = Line::from(vec![
            Span::styled(" citadel ", theme::title()),
            Span::styled(fragment, Style::default().fg(theme::MEESEEKS_BLUE)),
            Span::raw("  "),
            Span::styled(self.api_host.as_str(), Style::default().fg(theme::BORDER_DIM)),
            Span::styled("  │  ", theme::hint()),
            Span::styled("? ", theme::hint_key()),
            Span::styled("help  ", theme::hint()),
            Span::styled("q ", theme::hint_key()),
            Span::styled("quit", theme::hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let width = area.width.min(56);
        let height = area.height.min(16);
        let overlay = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, overlay);
        let block = Block::default()
            .title(" Help ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_active())
            .style(Style::default().bg(theme::BG_OVERLAY));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let lines = vec![
            Line::from(""),
            help_section("Navigation"),
            help_hint("j/k, ↓/↑", "move selection"),
            help_hint("g / G", "first / last row"),
            help_hint("Enter", "open character"),
            help_hint("h/l, ←/→", "previous / next page"),
            help_hint("Esc, Backspace", "back to the catalog"),
            Line::from(""),
            help_section("Global"),
            help_hint("r", "reload the current view"),
            help_hint("?", "toggle this help"),
            help_hint("q, Ctrl+C", "quit"),
            Line::from(""),
            Line::from(Span::styled("  Esc or ? to close", theme::hint())),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn help_section(title: &str) -> Line<'static> {
    Line::from(Span::styled(format!("  {title}"), theme::title()))
}

fn help_hint(keys: &str, what: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<16}"), theme::hint_key()),
        Span::styled(what.to_owned(), theme::hint()),
    ])
}
