//! Input handling for the pinpad TUI.
//!
//! A blocking reader thread feeds crossterm events into a bounded
//! channel; the frame loop drains it non-blocking with a per-frame
//! budget. Key events pass through the engine's pre-filter before they
//! can touch the row, so letters, symbols and IME sequences die here.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tracing::debug;

use pinpad_engine::{App, KeyPress, KeyVerdict, classify_key};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the reader thread unblocks if it
        // is currently backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; never block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input and apply it to the app. Returns true when the
/// session should end.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, &ev, Instant::now()) {
            return Ok(true);
        }

        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Visible both to the frame loop (via
/// `handle_events`) and to tests, which feed synthetic events with a
/// controlled clock.
pub fn apply_event(app: &mut App, event: &Event, now: Instant) -> bool {
    match event {
        Event::Key(key) => {
            // Press + repeat only; releases carry no intent.
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return true;
            }

            match key.code {
                KeyCode::Esc => app.request_quit(),
                KeyCode::Enter => app.activate_submit(now),
                KeyCode::BackTab => app.tab_backward(now),
                _ => dispatch_row_key(app, key, now),
            }
        }
        // Multi-character paste is out of scope for the row: digits
        // enter one keystroke at a time or not at all.
        Event::Paste(text) => {
            debug!(len = text.len(), "Dropping pasted text");
        }
        _ => {}
    }
    app.should_quit()
}

fn dispatch_row_key(app: &mut App, key: &KeyEvent, now: Instant) {
    let press = match key.code {
        KeyCode::Char(c) => KeyPress::Char(c),
        KeyCode::Backspace => KeyPress::Backspace,
        KeyCode::Delete => KeyPress::Delete,
        KeyCode::Left => KeyPress::Left,
        KeyCode::Right => KeyPress::Right,
        KeyCode::Tab => KeyPress::Tab,
        _ => KeyPress::Other,
    };

    match classify_key(press) {
        KeyVerdict::Accept(row_key) => app.handle_key(row_key, now),
        KeyVerdict::Reject => {}
    }
}
