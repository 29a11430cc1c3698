pub mod app;
pub mod components;
pub mod definitions;
pub mod event;
pub mod i18n;
pub mod lottie;
pub mod picker;
pub mod translate;
pub mod tui;
pub mod ui;

use anyhow::Result;
use app::App;
use crossterm::event::{Event as CrosstermEvent, EventStream};
use event::Event;
use futures_util::StreamExt;
use std::time::Duration;
use tui::{init, restore};
use ui::render;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut tui = init()?;
    let mut app = App::new()?;
    app.start_background_fetches();

    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(Duration::from_millis(250));

    while app.running {
        tui.draw(|frame| render(&mut app, frame))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    // Ignore other crossterm events for now
                    Some(Ok(_)) => continue,
                    // If the event stream ends or errors, we'll break the loop
                    Some(Err(_)) | None => break,
                }
            }
        };

        match event {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
        }
    }

    restore()?;
    Ok(())
}
