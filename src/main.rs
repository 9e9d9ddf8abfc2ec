//! ctxsel: pick calendar contexts and sections from a checkbox tree.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ctxsel::{app_state, config, input, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Parser)]
#[command(name = "ctxsel")]
#[command(about = "Pick calendar contexts and sections for an appointment group", long_about = None)]
struct Args {
    /// JSON document with `contexts` and an optional `appointment_group`
    #[arg(value_name = "PATH")]
    input: PathBuf,

    /// Reject duplicate identifiers and committed codes missing from the context list
    #[arg(long)]
    strict: bool,

    /// Styling class shown on the root block
    #[arg(long)]
    class_name: Option<String>,

    /// Write debug logs to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let cfg = config::Config::load();

    if let Some(ref log_path) = args.log {
        init_logging(log_path)?;
    }

    let doc = input::load_input(&args.input).map_err(io::Error::other)?;
    let catalog = ctxsel::context::Catalog::new(doc.contexts.clone());
    if args.strict {
        input::validate(&catalog, &doc.appointment_group).map_err(io::Error::other)?;
    }

    if catalog.listed().next().is_none() {
        eprintln!("No course contexts with sections found");
        return Ok(());
    }

    // Override config with command line args
    let class_name = args.class_name.or_else(|| Some(cfg.class_name.clone()));
    let app = app_state::AppState::new(doc.contexts, doc.appointment_group, cfg.messages())
        .with_class_name(class_name);

    run_tui(app, &cfg)
}

fn run_tui(mut app: app_state::AppState, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else {
        let codes = app.selected_codes();
        tracing::info!(
            contexts = codes.context_codes.len(),
            sections = codes.sub_context_codes.len(),
            "selection finished"
        );
        let json = serde_json::to_string_pretty(&codes).map_err(io::Error::other)?;
        println!("{json}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    use ctxsel::dropdown::Focus;

    loop {
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Tab => app.controller.next_focus(),
            KeyCode::BackTab => app.controller.prev_focus(),
            KeyCode::Enter => app.activate_focused(),
            KeyCode::Char('r') => app.revert(),
            KeyCode::Char(' ') => match app.controller.focus {
                Focus::Button => app.activate_button(),
                Focus::Tree => {
                    app.toggle_at_cursor();
                }
                Focus::Done => app.activate_done(),
            },
            code if app.controller.focus == Focus::Tree => match code {
                KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
                KeyCode::Left | KeyCode::Char('h') => app.collapse_at_cursor(),
                KeyCode::Right | KeyCode::Char('l') => app.expand_at_cursor(),
                _ => {}
            },
            _ => {}
        }
    }
}
