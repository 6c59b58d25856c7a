use {
    crate::{
        api,
        domain::wallet,
        infra::{config, indexer::Indexer, node::Node, persistence::Store},
    },
    clap::Parser,
    std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration},
    tokio::sync::oneshot,
};

/// Command line arguments for the wallet gateway.
#[derive(Debug, Parser)]
pub struct Args {
    /// The socket address to bind to.
    #[arg(long, env, default_value = "0.0.0.0:7872")]
    pub addr: SocketAddr,

    /// Path to the gateway configuration TOML file.
    #[arg(long, env)]
    pub config: PathBuf,

    /// Tracing filter directives.
    #[arg(long, env, default_value = "info")]
    pub log: String,
}

/// Runs the gateway until it receives a shutdown signal.
pub async fn run() {
    serve(Args::parse(), None).await;
}

/// Runs the gateway, reporting the bound address on `bind` once the server
/// is listening. Used by the API tests with an OS-assigned port.
pub async fn start(args: Args, bind: oneshot::Sender<SocketAddr>) {
    serve(args, Some(bind)).await;
}

async fn serve(args: Args, bind: Option<oneshot::Sender<SocketAddr>>) {
    init_tracing(&args.log);
    tracing::info!("starting {}", env!("CARGO_PKG_NAME"));

    let config = config::load(&args.config).await;

    let node = Node::new(&config.node_url)
        .unwrap_or_else(|err| panic!("invalid node URL {}: {err}", config.node_url));
    let store = Store::new(config.wallet_store.clone());
    let wallets = store
        .load()
        .await
        .unwrap_or_else(|err| panic!("failed to load wallet store: {err}"));

    let state = Arc::new(api::State::new(
        config.chain,
        node,
        Indexer::new(config.indexer),
        store,
        wallet::Registry::new(wallets),
    ));

    if let Some(interval) = config.refresh_interval {
        tokio::spawn(refresh_loop(state.clone(), interval));
    }

    let api = api::Api {
        addr: args.addr,
        state,
    };
    if let Err(err) = api.serve(bind, shutdown_signal()).await {
        tracing::error!(?err, "api task exited");
    }
}

/// Periodically refreshes connected wallets from the indexer. The first
/// refresh runs immediately, reconnecting the wallets persisted from the
/// previous session.
async fn refresh_loop(state: Arc<api::State>, interval: Duration) {
    let mut timer = tokio::time::interval(interval);
    timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        timer.tick().await;
        if let Err(err) = state.refresh_wallets().await {
            tracing::warn!(?err, "wallet refresh failed");
        }
    }
}

fn init_tracing(filter: &str) {
    // `try_init` keeps repeated initialization from panicking when multiple
    // gateway instances run in the same test process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .try_init();
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
