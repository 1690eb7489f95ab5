//! Terminal UI dashboard for skill-gap metrics and training
//! recommendations.
//!
//! Four sections: an overview with metric tiles and charts, employee and
//! skill tables, and an analysis view with deficit and recommendation
//! details. All data comes from the remote API via
//! [`skillgap_client::ApiClient`]; all shaping happens in
//! `skillgap_analysis`.
//!
//! The run loop is a single `tokio::select!` over terminal input, a tick
//! timer, and completed background loads. Loads carry request-generation
//! tokens so a slow response can never overwrite a newer one.

#![deny(unsafe_code)]

pub mod format;
mod load;
mod state;
mod view;

pub use load::{DashboardData, LoadEvent};
pub use state::{Alert, AlertLevel, App, Generations, Section, ALERT_TTL};

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use skillgap_client::ApiClient;
use tokio::sync::mpsc;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the dashboard until the user quits.
pub async fn run(client: ApiClient) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        return Err(anyhow!("dashboard requires a TTY"));
    }
    let mut terminal = ratatui::init();
    let (app, events) = App::new(client);
    let result = event_loop(&mut terminal, app, events).await;
    ratatui::restore();
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    mut app: App,
    mut events: mpsc::Receiver<LoadEvent>,
) -> Result<()> {
    app.request(Section::Dashboard);

    let mut input = EventStream::new();
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    loop {
        terminal.draw(|frame| view::draw(frame, &app))?;

        tokio::select! {
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    on_key(&mut app, key.code);
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            Some(event) = events.recv() => app.apply(event),
            _ = tick.tick() => app.on_tick(),
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

fn on_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('1') => app.select_section(Section::Dashboard),
        KeyCode::Char('2') => app.select_section(Section::Employees),
        KeyCode::Char('3') => app.select_section(Section::Skills),
        KeyCode::Char('4') => app.select_section(Section::Analysis),
        KeyCode::Tab => app.select_section(app.section().next()),
        KeyCode::BackTab => app.select_section(app.section().prev()),
        KeyCode::Char('r') => app.request(app.section()),
        KeyCode::Char('a') => app.run_analysis(),
        KeyCode::Char('t') => app.fetch_recommendations(),
        KeyCode::Char('d') => app.dismiss_alert(),
        _ => {}
    }
}
