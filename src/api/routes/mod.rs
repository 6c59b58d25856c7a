mod healthz;
mod metrics;
mod network;
mod requests;
mod wallets;
mod withdrawals;

pub use {
    healthz::healthz,
    metrics::metrics,
    network::network,
    requests::{list as list_requests, queue as queue_request, resolve as resolve_request},
    wallets::{
        connect as connect_wallet,
        disconnect as disconnect_wallet,
        list as list_wallets,
        refresh as refresh_wallets,
    },
    withdrawals::{estimate, validate},
};
