//! tabkit - terminal demo of the tab component
//!
//! Shows the configured panes behind a tab menu. Runs uncontrolled by
//! default; `--active-index` runs it controlled, with this application
//! feeding every requested index back into the component.

mod config;

use crate::config::Config;
use clap::{Parser, ValueEnum};
use color_eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::cell::Cell;
use std::fs::OpenOptions;
use std::io::stdout;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;
use tabkit_core::{ActivationEvent, ThemeName};
use tabkit_ui::{Tab, TabProps};
use tracing_subscriber::EnvFilter;

const HELP: &str = " ←/→ switch  1-9 jump  click select  q quit";

/// Terminal demo of the tabkit tab component
#[derive(Parser, Debug)]
#[command(name = "tabkit", version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run controlled, starting at this pane
    #[arg(long, conflicts_with = "default_active_index")]
    active_index: Option<usize>,

    /// Pane shown first when running uncontrolled
    #[arg(long)]
    default_active_index: Option<usize>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write the effective configuration and exit
    #[arg(long)]
    write_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeName {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeName::Dark,
            ThemeArg::Light => ThemeName::Light,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    init_logging(&cli)?;

    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let mut config = Config::load(&path)?;
    config.apply_cli(cli.theme.map(Into::into), cli.default_active_index);

    if cli.write_config {
        config.save(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let mut demo = Demo::new(config.tab_props(), cli.active_index);
    tracing::info!(mode = %demo.tab.mode(), panes = demo.props.panes.len(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut demo);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = match (&cli.log_file, cli.verbose) {
        (_, true) => "debug",
        (Some(_), false) => "info",
        // Only warnings reach the terminal while the UI owns it
        (None, false) => "warn",
    };
    let mut filter = EnvFilter::from_default_env();
    for target in ["tabkit", "tabkit_ui", "tabkit_core"] {
        filter = filter.add_directive(format!("{target}={level}").parse()?);
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

/// The mounted component plus what a controlling caller keeps.
struct Demo {
    tab: Tab,
    props: TabProps,
    controlled: bool,
    requested: Rc<Cell<usize>>,
}

impl Demo {
    fn new(props: TabProps, active_index: Option<usize>) -> Self {
        let requested = Rc::new(Cell::new(active_index.unwrap_or_default()));
        let sink = Rc::clone(&requested);
        let mut props = props.on_tab_change(move |_, change| {
            tracing::info!(
                index = change.active_index,
                label = %change.active_pane.label_text(),
                key = ?change.active_pane.menu_item().and_then(|label| label.key.as_deref()),
                reselect = change.is_reselect(),
                "tab changed"
            );
            sink.set(change.active_index);
        });
        props.set_active_index(active_index);

        let tab = Tab::mount(&props);
        Demo {
            tab,
            props,
            controlled: active_index.is_some(),
            requested,
        }
    }

    /// Feeds the last requested index back when running controlled.
    fn sync(&mut self) {
        if self.controlled {
            self.props.set_active_index(Some(self.requested.get()));
        }
    }

    fn handle(&mut self, area: Rect, event: &Event) -> Result<()> {
        if let Some(activation) = ActivationEvent::from_terminal(event) {
            self.tab.handle_event(&mut self.props, area, &activation)?;
        }
        Ok(())
    }
}

fn tab_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(1),
        ..area
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && matches!(
            (key.modifiers, key.code),
            (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc)
                | (KeyModifiers::CONTROL, KeyCode::Char('c'))
        )
}

fn run_app<B>(terminal: &mut Terminal<B>, demo: &mut Demo) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        demo.sync();

        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = tab_area(frame.area());
            let view = demo.tab.render(&demo.props);
            frame.render_widget(&view, area);

            let help_area = Rect::new(area.x, area.bottom(), area.width, 1);
            frame.render_widget(
                Paragraph::new(HELP).style(demo.props.theme.body().fg(demo.props.theme.colors.muted)),
                help_area,
            );
        })?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if let Event::Key(key) = &event {
                if is_quit(key) {
                    break;
                }
            }
            demo.handle(area, &event)?;
        }
    }

    Ok(())
}
