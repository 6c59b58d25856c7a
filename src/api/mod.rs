//! Serve the gateway's HTTP API.

use {
    crate::{
        domain::{eth, wallet},
        infra::{indexer::Indexer, node::Node, persistence::Store},
    },
    std::{future::Future, net::SocketAddr, sync::Arc},
    tokio::sync::{Mutex, oneshot},
    tower_http::trace::TraceLayer,
};

mod routes;

pub struct Api {
    pub addr: SocketAddr,
    pub state: Arc<State>,
}

impl Api {
    /// Runs the API server until `shutdown` resolves. If `bind` is given, it
    /// receives the server's local address once bound.
    pub async fn serve(
        self,
        bind: Option<oneshot::Sender<SocketAddr>>,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), hyper::Error> {
        let app = axum::Router::new()
            .route("/healthz", axum::routing::get(routes::healthz))
            .route("/metrics", axum::routing::get(routes::metrics))
            .route("/network", axum::routing::get(routes::network))
            .route(
                "/withdrawals/validate",
                axum::routing::post(routes::validate),
            )
            .route(
                "/withdrawals/estimate",
                axum::routing::post(routes::estimate),
            )
            .route(
                "/wallets",
                axum::routing::get(routes::list_wallets).post(routes::connect_wallet),
            )
            .route("/wallets/refresh", axum::routing::post(routes::refresh_wallets))
            .route("/wallets/:id", axum::routing::delete(routes::disconnect_wallet))
            .route(
                "/signature-requests",
                axum::routing::get(routes::list_requests).post(routes::queue_request),
            )
            .route(
                "/signature-requests/:id",
                axum::routing::delete(routes::resolve_request),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        let server = axum::Server::bind(&self.addr).serve(app.into_make_service());
        if let Some(bind) = bind {
            let _ = bind.send(server.local_addr());
        }
        server.with_graceful_shutdown(shutdown).await
    }
}

/// State shared between request handlers.
pub struct State {
    pub chain: eth::Chain,
    pub node: Node,
    pub indexer: Indexer,
    pub store: Store,
    pub registry: Mutex<wallet::Registry>,
}

impl State {
    pub fn new(
        chain: eth::Chain,
        node: Node,
        indexer: Indexer,
        store: Store,
        wallets: wallet::Registry,
    ) -> Self {
        Self {
            chain,
            node,
            indexer,
            store,
            registry: Mutex::new(wallets),
        }
    }

    /// Re-fetches every account of every connected wallet, marks wallets
    /// with no reachable accounts as disconnected, and persists the result.
    pub async fn refresh_wallets(&self) -> anyhow::Result<()> {
        let snapshot = self.registry.lock().await.wallets().to_vec();
        let refreshed = futures::future::join_all(
            snapshot.into_iter().map(|wallet| self.refresh_wallet(wallet)),
        )
        .await;

        let mut registry = self.registry.lock().await;
        registry.replace_wallets(refreshed);
        self.store.save(registry.wallets()).await
    }

    async fn refresh_wallet(&self, mut wallet: wallet::Wallet) -> wallet::Wallet {
        let accounts: Vec<_> = futures::future::join_all(
            wallet
                .accounts
                .iter()
                .map(|account| self.indexer.account(&account.address)),
        )
        .await
        .into_iter()
        .filter_map(Result::ok)
        .collect();

        wallet.connected = !accounts.is_empty();
        wallet.accounts = accounts;
        wallet
    }
}
