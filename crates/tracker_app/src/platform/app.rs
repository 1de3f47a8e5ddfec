use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use tracker_core::{render_cards_html, update, AppState, Msg};
use tracker_engine::ReqwestJobsApi;
use tracker_logging::{tracker_info, tracker_warn};

use super::config::Config;
use super::effects::EffectRunner;
use super::logging;
use super::ui;
use super::ui::input::UiCommand;

/// Everything the main loop reacts to.
pub enum Inbox {
    Msg(Msg),
    Html,
    Help,
    Quit,
}

pub fn run_app(config: Config) -> anyhow::Result<()> {
    logging::initialize(config.log);
    tracker_info!("Starting job tracker client against {}", config.base_url);

    let api = ReqwestJobsApi::new(&config.base_url, &config.client_settings())
        .with_context(|| format!("cannot use backend url '{}'", config.base_url))?;

    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbox>();
    let runner = EffectRunner::new(Arc::new(api), inbox_tx.clone());

    spawn_input_reader(inbox_tx.clone());
    spawn_auto_refresh(inbox_tx.clone(), config.refresh_interval());
    let _ = inbox_tx.send(Inbox::Msg(Msg::Started));
    drop(inbox_tx);

    let mut state = AppState::new().with_search_debounce(config.search_debounce());
    let mut out = io::stdout();
    writeln!(out, "{}", ui::constants::HELP_TEXT)?;

    while let Ok(item) = inbox_rx.recv() {
        match item {
            Inbox::Msg(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.run(effects);

                if state.consume_dirty() {
                    write_lines(&mut out, &ui::render::render(&state.view()))?;
                }
                if let Some(message) = state.take_notification() {
                    write_lines(&mut out, &ui::render::render_notification(&message))?;
                }
            }
            Inbox::Html => write!(out, "{}", render_cards_html(&state.view()))?,
            Inbox::Help => writeln!(out, "{}", ui::constants::HELP_TEXT)?,
            Inbox::Quit => break,
        }
        write!(out, "{}", ui::constants::PROMPT)?;
        out.flush()?;
    }

    tracker_info!("Job tracker client stopped");
    Ok(())
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn spawn_input_reader(inbox: mpsc::Sender<Inbox>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    tracker_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            let item = match ui::input::parse_command(&line) {
                Ok(Some(UiCommand::Dispatch(msg))) => Inbox::Msg(msg),
                Ok(Some(UiCommand::Html)) => Inbox::Html,
                Ok(Some(UiCommand::Help)) => Inbox::Help,
                Ok(Some(UiCommand::Quit)) => Inbox::Quit,
                Ok(None) => continue,
                Err(message) => {
                    eprintln!("{message}");
                    continue;
                }
            };
            if inbox.send(item).is_err() {
                return;
            }
        }
        // End of input closes the app.
        let _ = inbox.send(Inbox::Quit);
    });
}

/// Periodic refresh of stats and the current page.
fn spawn_auto_refresh(inbox: mpsc::Sender<Inbox>, interval: Duration) {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if inbox.send(Inbox::Msg(Msg::AutoRefreshTick)).is_err() {
            break;
        }
    });
}
