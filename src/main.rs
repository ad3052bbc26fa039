//! Offering rating TUI
//!
//! A Ratatui-based terminal client for reading an offering's reviews and
//! posting a rated comment to the catalog server.

mod app;
mod cli;
mod client;
mod config;
mod error;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::Cli;
use client::{CookieJar, EndpointResolver, HttpRatingClient, CSRF_COOKIE};
use config::RatingConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = match &cli.config {
        Some(path) => RatingConfig::load_from(path)?,
        None => RatingConfig::load()?,
    };
    let server_url = config.resolve_server_url(cli.server_url.as_deref());
    if let Some(token) = &cli.csrf_token {
        config.cookies.insert(CSRF_COOKIE.to_string(), token.clone());
    }

    if cli.save_config {
        config.server_url = Some(server_url.clone());
        match &cli.config {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        tracing::info!("Configuration saved");
    }

    let client = HttpRatingClient::new()?;
    let mut cookies = CookieJar::from_config(&config);
    if let Some(token) = &cli.csrf_token {
        cookies.set(CSRF_COOKIE, token.clone());
    }
    let resolver = EndpointResolver::new(&server_url);
    tracing::info!("Using catalog server {}", resolver.base_url());

    let mut app = App::new(
        cli.offering(),
        Arc::new(client),
        resolver,
        Box::new(cookies),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.refresh_offering();
    if cli.comment {
        app.open_comment_form();
    }
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Keep the hit-testing area in step with what gets drawn
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        terminal.draw(|frame| ui::draw(frame, &app.state))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key);
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on next draw
                }
                _ => {}
            }
        }

        // Apply completed background requests
        app.drain_client_events();

        if app.should_quit() {
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}
