mod app;
mod cli;
mod config;
mod controller;
mod error;
mod event;
mod model;
mod store;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use controller::SyncController;
use model::TaskDraft;
use store::{HttpStore, MemoryStore, TaskStore};

/// 根据 CLI 参数和配置构造存储，返回 (store, 标题栏展示用的标识)
fn build_store(cli: &Cli, config: &config::Config) -> (Box<dyn TaskStore>, String) {
    if cli.demo {
        return (Box::new(MemoryStore::with_demo_tasks()), "demo".to_string());
    }
    let base_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.server.base_url.clone());
    let timeout = Duration::from_secs(config.server.timeout_secs);
    let store = HttpStore::new(&base_url, timeout);
    (Box::new(store), base_url)
}

/// 启动 TUI 界面
fn run_tui(store: Box<dyn TaskStore>, server_label: String, theme: theme::Theme) -> io::Result<()> {
    let mut terminal = ratatui::init();

    let mut app = App::new(SyncController::new(store), server_label, theme);
    let result = run(&mut terminal, &mut app);

    ratatui::restore();
    result
}

/// 主循环：渲染 → 处理事件，直到退出
fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;
        if !event::handle_events(app)? {
            return Ok(());
        }
    }
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let cli = Cli::parse();
    if let Err(e) = config::init_config_if_missing() {
        eprintln!("taskman: could not write default config: {e}");
    }
    let config = config::load_config();
    let (store, server_label) = build_store(&cli, &config);

    match cli.command {
        None => {
            let theme = theme::Theme::from_name(&config.theme.name);
            run_tui(store, server_label, theme)?;
        }
        Some(Commands::List { json }) => {
            if let Err(e) = cli::execute_list(store.as_ref(), json) {
                eprintln!("taskman: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Add {
            title,
            description,
            status,
        }) => {
            let draft = TaskDraft {
                title,
                description,
                status,
            };
            if let Err(e) = cli::execute_add(store.as_ref(), &draft) {
                eprintln!("taskman: {e}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
