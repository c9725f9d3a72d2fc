//! Runtime: unified event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input and the scroll animation.
//! - Route events to the main view and execute returned `Effect`s.
//! - Render only when something changed.
//!
//! Input is read on a dedicated task that blocks on `crossterm` polling and
//! forwards events over a channel; keeping `poll()` and `read()` together
//! avoids lost or delayed events in some terminals. Ticking is smart: a
//! fast interval only while a scroll transition is live, a long idle
//! interval otherwise.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lookout_types::{Effect, Msg, PageDocument};
use lookout_util::preferences::UserPreferences;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::ViewerOptions;
use crate::app::{App, SharedCtx};
use crate::theme::{DEFAULT_THEME_ID, Theme};
use crate::ui::main_view::MainView;

/// Tick cadence while a scroll transition is live.
const FAST_TICK: Duration = Duration::from_millis(40);

/// Tick cadence while idle.
const IDLE_TICK: Duration = Duration::from_millis(5000);

/// Spawn a dedicated input task that blocks on terminal polling and forwards
/// `crossterm` events over a Tokio channel. Mouse-move events are dropped at
/// the source; nothing downstream consumes them.
async fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::spawn(async move {
        let poll_window = Duration::from_millis(16);
        loop {
            match event::poll(poll_window) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if matches!(&event, Event::Mouse(mouse) if mouse.kind == MouseEventKind::Moved) {
                            continue;
                        }
                        if sender.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        tracing::warn!("failed to read terminal event: {error}");
                        break;
                    }
                },
                Ok(false) => {}
                Err(error) => {
                    tracing::warn!("failed to poll terminal events: {error}");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the input
/// task, runs the event loop, and performs cleanup on exit.
pub async fn run_app(document: PageDocument, preferences: Arc<UserPreferences>, options: ViewerOptions) -> Result<()> {
    let mut input_receiver = spawn_input_thread().await;

    let theme_id = options
        .theme_override
        .clone()
        .or_else(|| preferences.preferred_theme())
        .unwrap_or_else(|| DEFAULT_THEME_ID.to_string());
    let smooth_scroll = if options.plain {
        false
    } else {
        preferences.smooth_scroll().unwrap_or(true)
    };

    let ctx = SharedCtx::new(Theme::by_id(&theme_id), preferences, smooth_scroll);
    let mut app = App::new(document, ctx);
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    // Establish real geometry before the first frame; App composed at a
    // placeholder width.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();
    if let Some((width, height)) = last_size {
        app.update(&Msg::Resize(width, height));
    }

    let mut effects: Vec<Effect> = Vec::with_capacity(4);
    let mut current_interval = IDLE_TICK;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    'main: loop {
        // Swap tick cadence when animation state changes.
        let needs_animation = app.is_animating();
        let target_interval = if needs_animation { FAST_TICK } else { IDLE_TICK };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut needs_render = false;
        tokio::select! {
            // Terminal input events
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(event) => {
                        if let Event::Key(key_event) = &event
                            && key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break 'main;
                        }
                        effects.extend(handle_input_event(&mut app, &mut main_view, event));
                        needs_render = true;
                    }
                    // Input channel closed; shut down cleanly.
                    None => break 'main,
                }
            }

            // Periodic animation tick
            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, Msg::Tick));
                needs_render = needs_animation;
            }

            // Handle Ctrl+C delivered as a signal
            _ = signal::ctrl_c() => break 'main,
        }

        for effect in effects.drain(..) {
            match effect {
                Effect::ScrollToSection(target_id) => {
                    app.start_scroll_to_section(&target_id);
                    needs_render = true;
                }
                Effect::Quit => break 'main,
            }
        }

        // Fallback: detect terminal size changes even if no explicit Resize
        // event was received.
        if let Ok((width, height)) = crossterm::terminal::size()
            && last_size != Some((width, height))
        {
            last_size = Some((width, height));
            app.update(&Msg::Resize(width, height));
            needs_render = true;
        }

        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
