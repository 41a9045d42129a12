//! Terminal input pump.
//!
//! A background task multiplexes crossterm's event stream with two
//! timers: a coarse tick that advances animations and a fast one that
//! schedules frames. The app loop consumes all of them as one
//! [`Event`] channel.

use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// New terminal dimensions (cols, rows).
    Resize(u16, u16),
    /// Animation tick (throbber advance).
    Tick,
    /// Frame schedule tick.
    Render,
}

/// Map a raw terminal event to ours. Key releases and repeats are
/// dropped so a pressed key acts exactly once.
fn translate(raw: TermEvent) -> Option<Event> {
    match raw {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        TermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        TermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

pub struct Events {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl Events {
    /// Spawn the pump. `tick_rate` paces [`Event::Tick`],
    /// `render_rate` paces [`Event::Render`].
    pub fn new(tick_rate: Duration, render_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let stop = cancel.clone();
        tokio::spawn(async move {
            let mut stream = EventStream::new();
            let mut ticks = tokio::time::interval(tick_rate);
            let mut frames = tokio::time::interval(render_rate);
            // Catching up on missed ticks would burst-advance the
            // throbber; skip them instead.
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                let event = tokio::select! {
                    () = stop.cancelled() => break,
                    _ = ticks.tick() => Event::Tick,
                    _ = frames.tick() => Event::Render,
                    Some(Ok(raw)) = stream.next() => {
                        let Some(event) = translate(raw) else { continue };
                        event
                    }
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx, cancel }
    }

    /// `None` once the pump has shut down.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for Events {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
