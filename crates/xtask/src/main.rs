// Workspace task runner
//
// cargo xtask serve [--port 8080]        Serve the bundled todo application
// cargo xtask install-browsers [engine]  Install Playwright browser binaries

use anyhow::{Context, ensure};
use axum::Router;
use axum::response::Html;
use axum::routing::get;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace tasks for the todo suite")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the bundled todo application over HTTP for manual poking
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Install the Playwright browser binaries via npx
    InstallBrowsers {
        /// Restrict the install to one engine (chromium, firefox, webkit)
        engine: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port } => serve(port).await,
        Command::InstallBrowsers { engine } => install_browsers(engine.as_deref()).await,
    }
}

async fn todo_app() -> Html<&'static str> {
    Html(todomvc_e2e::fixture::TODO_APP_HTML)
}

async fn serve(port: u16) -> anyhow::Result<()> {
    let app = Router::new().route("/", get(todo_app));
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("Failed to bind 127.0.0.1:{port}"))?;
    println!("Serving the todo application at http://{}", listener.local_addr()?);
    println!("Press Ctrl-C to stop");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("Server error")?;
    Ok(())
}

async fn install_browsers(engine: Option<&str>) -> anyhow::Result<()> {
    let version = playwright_rs::PLAYWRIGHT_VERSION;
    match engine {
        Some(engine) => println!("Installing the {engine} browser for Playwright {version}"),
        None => println!("Installing the Playwright {version} browsers"),
    }

    let mut command = tokio::process::Command::new("npx");
    command.arg(format!("playwright@{version}")).arg("install");
    if let Some(engine) = engine {
        command.arg(engine);
    }

    let status = command
        .status()
        .await
        .context("Failed to run npx; a Node.js toolchain is required")?;
    ensure!(status.success(), "npx playwright install exited with {status}");
    println!("✓ Browsers installed");
    Ok(())
}
