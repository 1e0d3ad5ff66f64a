//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, owns
//! the navigation `History`, and translates keyboard events into
//! `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Effects
//!
//! `update()` returns an `Effect`; [`perform`] carries it out:
//! - `PushLocation` / `ReplaceLocation` move the history
//! - `CopyToClipboard` runs on the blocking pool (see `clipboard`)
//! - `ScheduleShareReset` sleeps on tokio, then sends the expiry back
//!
//! Background work reports back over an `mpsc` channel drained once per loop.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after an event or a background action.

mod clipboard;
mod component;
pub mod components;
pub mod event;
pub mod markdown;
mod ui;

use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use log::{debug, info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::history::History;
use crate::core::resolve::NavigationState;
use crate::core::state::{App, View};
use crate::tui::component::EventHandler;
use crate::tui::components::category_tabs;
use crate::tui::components::{
    DetailViewState, ItemListState, ListEvent, ManualCopy, SearchBar, SearchEvent, TagEvent,
    TagPickerState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Where typed characters go on the listing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
}

/// What a key press asks the runtime to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    Back,
    Forward,
    /// Leave the detail view: history back if possible, else close in place.
    Leave,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub search: SearchBar,
    pub list: ItemListState,
    pub detail: DetailViewState,
    /// Tag overlay (None = hidden)
    pub tag_picker: Option<TagPickerState>,
    /// Navigation and view seen at the last sync, to reset scroll/selection.
    last_nav: Option<NavigationState>,
    last_view: Option<View>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Results,
            search: SearchBar::new(),
            list: ItemListState::new(),
            detail: DetailViewState::new(),
            tag_picker: None,
            last_nav: None,
            last_view: None,
        }
    }

    /// Bring presentation state in line with `app` before drawing.
    pub fn sync(&mut self, app: &App) {
        self.search.set_text(&app.nav.query);
        self.search.focused = self.focus == Focus::Search && app.view == View::Listing;

        if self.last_nav.as_ref() != Some(&app.nav) {
            self.list.reset();
            self.last_nav = Some(app.nav.clone());
        }
        self.list.clamp(app.results().len());
        if self.last_view.as_ref() != Some(&app.view) {
            self.detail.reset();
            self.last_view = Some(app.view.clone());
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Command> {
        // Global shortcuts work everywhere, overlays included.
        match event {
            TuiEvent::ForceQuit => return Some(Command::Dispatch(Action::Quit)),
            TuiEvent::Share => return Some(Command::Dispatch(Action::Share)),
            TuiEvent::Reset => {
                self.tag_picker = None;
                self.focus = Focus::Results;
                return Some(Command::Dispatch(Action::Reset));
            }
            TuiEvent::Back => return Some(Command::Back),
            TuiEvent::Forward => return Some(Command::Forward),
            TuiEvent::Resize => return None,
            _ => {}
        }

        if app.share.manual_copy.is_some() {
            return ManualCopy::dismisses(event)
                .then_some(Command::Dispatch(Action::DismissManualCopy));
        }

        if let Some(picker) = &mut self.tag_picker {
            let tag_event = picker.handle_event(event)?;
            self.tag_picker = None;
            return match tag_event {
                TagEvent::Toggle(tag) => Some(Command::Dispatch(Action::ToggleTag(tag))),
                TagEvent::Clear => Some(Command::Dispatch(Action::ClearTag)),
                TagEvent::Dismiss => None,
            };
        }

        match event {
            TuiEvent::NextCategory => return cycle_category(app, 1),
            TuiEvent::PrevCategory => return cycle_category(app, -1),
            _ => {}
        }

        if app.view != View::Listing {
            return self.handle_detail_event(event);
        }
        match self.focus {
            Focus::Search => self.handle_search_event(event, app),
            Focus::Results => self.handle_results_event(event, app),
        }
    }

    fn handle_detail_event(&mut self, event: &TuiEvent) -> Option<Command> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace => Some(Command::Leave),
            TuiEvent::InputChar('[') => Some(Command::Back),
            TuiEvent::InputChar(']') => Some(Command::Forward),
            _ => {
                self.detail.handle_event(event);
                None
            }
        }
    }

    fn handle_search_event(&mut self, event: &TuiEvent, app: &App) -> Option<Command> {
        // Arrow keys drive the results even while typing.
        if matches!(
            event,
            TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::PageUp | TuiEvent::PageDown
        ) {
            return self.handle_results_event(event, app);
        }
        match self.search.handle_event(event)? {
            SearchEvent::Changed(query) => Some(Command::Dispatch(Action::QueryChanged(query))),
            SearchEvent::Submit => {
                self.focus = Focus::Results;
                self.open_selected(app)
            }
            SearchEvent::Leave => {
                self.focus = Focus::Results;
                None
            }
        }
    }

    fn handle_results_event(&mut self, event: &TuiEvent, app: &App) -> Option<Command> {
        match event {
            TuiEvent::InputChar('/') => {
                self.focus = Focus::Search;
                None
            }
            TuiEvent::InputChar('t') => {
                let tags = app.catalog.tags().into_iter().map(str::to_string).collect();
                self.tag_picker = Some(TagPickerState::new(tags, app.nav.tag.clone()));
                None
            }
            TuiEvent::InputChar('[') => Some(Command::Back),
            TuiEvent::InputChar(']') => Some(Command::Forward),
            // Typing anywhere starts a search.
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                self.focus = Focus::Search;
                self.handle_search_event(event, app)
            }
            TuiEvent::Escape if app.nav.is_searching() => {
                Some(Command::Dispatch(Action::QueryChanged(String::new())))
            }
            TuiEvent::Escape if app.nav.tag.is_some() => Some(Command::Dispatch(Action::ClearTag)),
            _ => match self.list.handle_event(event)? {
                ListEvent::Open(_) => self.open_selected(app),
            },
        }
    }

    fn open_selected(&self, app: &App) -> Option<Command> {
        app.results()
            .get(self.list.selected)
            .map(|item| Command::Dispatch(Action::OpenItem(item.id.clone())))
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

fn cycle_category(app: &App, step: isize) -> Option<Command> {
    let names: Vec<String> = app
        .catalog
        .taxonomy()
        .categories()
        .iter()
        .map(|c| c.to_string())
        .collect();
    category_tabs::cycle(&names, app.active_category().as_str(), step)
        .map(|c| Command::Dispatch(Action::SelectCategory(c)))
}

/// Turn a command into the action to dispatch, moving `history` for
/// back/forward. `None` when there is nowhere to go.
pub fn navigate(command: Command, history: &mut History) -> Option<Action> {
    match command {
        Command::Dispatch(action) => Some(action),
        Command::Back => history.back().cloned().map(Action::LocationChanged),
        Command::Forward => history.forward().cloned().map(Action::LocationChanged),
        Command::Leave if history.can_go_back() => navigate(Command::Back, history),
        Command::Leave => Some(Action::CloseDetail),
    }
}

/// Carry out an effect. Returns true when the app should quit.
pub fn perform(effect: Effect, history: &mut History, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::PushLocation(location) => {
            history.push(location);
        }
        Effect::ReplaceLocation(location) => history.replace(location),
        Effect::CopyToClipboard(url) => clipboard::spawn_copy(url, tx.clone()),
        Effect::ScheduleShareReset { generation, after } => {
            spawn_share_reset(generation, after, tx.clone())
        }
    }
    false
}

fn dispatch(
    app: &mut App,
    history: &mut History,
    action: Action,
    tx: &mpsc::Sender<Action>,
) -> bool {
    let effect = update(app, action);
    perform(effect, history, tx)
}

fn spawn_share_reset(generation: u64, after: Duration, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        if tx.send(Action::ShareIndicatorExpired(generation)).is_err() {
            warn!("Failed to send share reset: receiver dropped");
        }
    });
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, Show, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(mut app: App, mut history: History) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            tui.sync(&app);
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(command) = tui.handle_event(&event, &app) else {
                continue;
            };
            if let Some(action) = navigate(command, &mut history) {
                should_quit |= dispatch(&mut app, &mut history, action, &tx);
            }
            // Keep selection/focus consistent for the next event in the batch.
            tui.sync(&app);
        }

        // Handle background task actions (clipboard results, timers)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= dispatch(&mut app, &mut history, action, &tx);
        }

        if should_quit {
            break;
        }
    }

    info!("Leaving at {}", history.current());
    ratatui::restore();
    Ok(())
}
