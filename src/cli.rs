//! CLI 模块

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::model::TaskDraft;
use crate::store::TaskStore;

#[derive(Parser)]
#[command(name = "taskman")]
#[command(version)]
#[command(about = "Terminal client for the task-manager REST API")]
pub struct Cli {
    /// Override the configured server address (e.g. http://localhost:8080)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Run against a seeded in-memory store instead of a remote server
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print all tasks and exit
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Create a task and print the stored record
    Add {
        /// Task title
        title: String,
        /// Task description (the backend rejects empty descriptions)
        #[arg(short, long)]
        description: String,
        /// Task status
        #[arg(short, long, default_value = "TODO")]
        status: String,
    },
}

/// `taskman list`：打印任务列表
pub fn execute_list(store: &dyn TaskStore, json: bool) -> Result<()> {
    let tasks = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks).unwrap_or_default());
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks.");
        return Ok(());
    }
    for task in &tasks {
        println!(
            "#{:<4} {:<12} {}{}",
            task.id,
            task.status,
            task.title,
            if task.description.is_empty() {
                String::new()
            } else {
                format!(" — {}", task.description)
            }
        );
    }
    Ok(())
}

/// `taskman add`：新建任务并打印服务端返回的记录
pub fn execute_add(store: &dyn TaskStore, draft: &TaskDraft) -> Result<()> {
    let created = store.create(draft)?;
    println!(
        "Created task #{} ({}): {}",
        created.id, created.status, created.title
    );
    Ok(())
}
