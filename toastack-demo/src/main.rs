mod screen;
mod terminal;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use toastack::{Event, Registry};

use crate::screen::{Flow, IndexScreen};
use crate::terminal::Terminal;

fn main() -> std::io::Result<()> {
    let log_file = File::create("toastack-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let registry = Registry::new();
    run(&registry)?;

    match registry.audit() {
        Ok(()) => log::info!("overlay stack released cleanly"),
        Err(e) => log::warn!("overlay stack audit: {}", e),
    }
    Ok(())
}

fn run(registry: &Registry) -> std::io::Result<()> {
    let mut term = Terminal::new()?;
    let screen = IndexScreen::new(registry);

    loop {
        term.draw(|buf| {
            let area = buf.area();
            screen.render(buf, area);
        })?;
        let area = term.area();

        for raw in term.poll(None)? {
            let Some(event) = Event::from_crossterm(&raw) else {
                continue;
            };
            if screen.handle_event(&event, area) == Flow::Quit {
                return Ok(());
            }
        }
    }
}
