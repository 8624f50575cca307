mod config;
mod data;
mod encourage;
mod error;
mod highlight;
mod models;
mod speech;
mod storage;
mod timers;
mod ui;

use std::fs;
use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, CliArgs};
use crate::encourage::{Dice, RandomSource};
use crate::storage::load_deck;
use crate::ui::{App, handle_key_event, handle_mouse_event, render};

/// 日志写入文件，终端留给界面
fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<(App, AppConfig)> {
    let config = AppConfig::load(CliArgs::parse())?;
    init_logging(&config)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?config.config,
        "starting pinyin-cards"
    );

    let deck = load_deck(config.deck.as_deref())?;
    let speech = speech::engine_from_config(&config.speech);
    let rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(Dice::seeded(seed)),
        None => Box::new(Dice::from_entropy()),
    };

    let mut app = App::new(deck, &config, speech, rng);
    if let Some(category) = config.start_category {
        app.show_category(category, Instant::now());
    }

    Ok((app, config))
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let (mut app, config) = create_app()?;

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app, config.timing.tick());

    // 恢复终端
    disable_raw_mode()?;
    if config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("bye");
    result?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> io::Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| render(f, app, now))?;

        // 动画需要持续重绘，没有输入时按帧间隔醒来
        if !event::poll(tick)? {
            continue;
        }
        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key_event(app, key.code, Instant::now())
            }
            Event::Mouse(mouse) => handle_mouse_event(app, mouse, Instant::now()),
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
