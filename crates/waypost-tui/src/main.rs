use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use waypost_core::config::CoreConfig;
use waypost_core::rpc::HttpTransport;
use waypost_core::tracing_setup::init_file_tracing;
use waypost_core::{CoreApi, MediaCache, Notifier};

use waypost_tui::contacts_file::ContactsFile;
use waypost_tui::runtime::run_app;
use waypost_tui::ui::terminal;
use waypost_tui::{App, ContactsBackend};

#[derive(Parser, Debug)]
#[command(name = "waypost-tui", about = "Edit your close friends list", version)]
struct Args {
    /// Contacts JSON file; takes precedence over the RPC endpoint
    #[arg(long, value_name = "FILE")]
    contacts: Option<PathBuf>,

    /// RPC bridge URL
    #[arg(long, value_name = "URL", env = "WAYPOST_RPC_URL")]
    endpoint: Option<String>,

    /// Id of the signed-in user when contacts come from the server;
    /// defaults to the contact the server marks as self
    #[arg(long)]
    self_id: Option<i64>,

    /// Start with the close friends picker open
    #[arg(long)]
    open: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("waypost");
    init_file_tracing(&log_dir.join("waypost-tui.log"), "info")?;

    let config = CoreConfig::from_env()?.with_endpoint(args.endpoint);
    let (notifier, core_events) = Notifier::channel();

    let backend = match (args.contacts, config.endpoint.is_some()) {
        (Some(path), _) => ContactsBackend::File(path),
        (None, true) => ContactsBackend::Remote {
            api: CoreApi::new(HttpTransport::from_config(&config)?, notifier, MediaCache::new()),
            current_user_id: args.self_id,
        },
        (None, false) => ContactsBackend::File(ContactsFile::default_path()),
    };
    tracing::info!(source = %backend.describe(), "starting waypost-tui");

    let (current_user_id, contacts) = backend.load().await?;
    let mut app = App::new(backend.describe(), current_user_id, contacts);
    if args.open {
        app.open_picker();
    }

    terminal::install_panic_hook();
    let mut tui = terminal::init()?;
    let result = run_app(&mut tui, &mut app, &backend, core_events).await;
    terminal::restore()?;

    if let Err(err) = result {
        tracing::error!("waypost-tui exited with error: {:#}", err);
        eprintln!("Error: {err}");
    }

    Ok(())
}
