//! The domain model for connected Algorand wallets and pending signature
//! requests.

use {
    bigdecimal::BigDecimal,
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    uuid::Uuid,
};

/// The kind of wallet a user connected.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalletType {
    Standard,
    Ledger,
    Rekeyed,
    WatchOnly,
}

/// An Algorand Standard Asset held by an account.
///
/// https://developer.algorand.org/docs/get-details/asa/
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AssetHolding {
    /// The unique ASA identifier on the Algorand network.
    pub id: u64,
    /// Ticker symbol, e.g. "USDC".
    pub unit_name: String,
    /// Full asset name, e.g. "USD Coin".
    pub name: String,
    /// Number of decimal places of the asset's base unit.
    pub decimals: u32,
    /// The account that created the asset.
    pub creator_address: String,
    /// The held amount, expressed in base units.
    pub balance: u64,
}

impl AssetHolding {
    /// The held balance rendered with the asset's full precision, followed
    /// by its unit name. Assets without decimals render as a bare integer.
    pub fn formatted_balance(&self) -> String {
        if self.decimals == 0 {
            return self.balance.to_string();
        }
        let value = BigDecimal::new(self.balance.into(), i64::from(self.decimals));
        format!("{} {}", value, self.unit_name)
    }
}

/// A single Algorand account within a wallet.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Account {
    /// Algorand public address (58-character base32 string).
    pub address: String,
    /// Balance in microAlgos.
    pub balance_micro_algos: u64,
    /// The auth address this account is rekeyed to, if any.
    pub auth_address: Option<String>,
    /// Algorand Standard Assets held by the account.
    pub assets: Vec<AssetHolding>,
}

impl Account {
    /// The balance in Algos (1 Algo = 10⁶ microAlgos), converted exactly.
    pub fn balance_algos(&self) -> BigDecimal {
        BigDecimal::new(self.balance_micro_algos.into(), 6)
    }

    /// Returns `true` if the account is rekeyed to a different auth address.
    pub fn is_rekeyed(&self) -> bool {
        self.auth_address
            .as_ref()
            .is_some_and(|auth| *auth != self.address)
    }
}

/// A wallet connected to the session. May hold one or more accounts.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Wallet {
    pub id: Uuid,
    pub name: String,
    pub kind: WalletType,
    pub accounts: Vec<Account>,
    /// When the wallet was first connected.
    pub connected_at: DateTime<Utc>,
    /// Whether the wallet is currently reachable in this session.
    pub connected: bool,
}

impl Wallet {
    pub fn new(name: String, kind: WalletType, accounts: Vec<Account>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            kind,
            accounts,
            connected_at: Utc::now(),
            connected: true,
        }
    }
}

/// A pending request to sign an Algorand transaction.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignatureRequest {
    pub id: Uuid,
    /// Base64-encoded unsigned transaction bytes.
    pub unsigned_txn: String,
    /// Human-readable description of the transaction.
    pub description: String,
    /// The account address expected to sign.
    pub signer_address: String,
}

impl SignatureRequest {
    pub fn new(unsigned_txn: String, description: String, signer_address: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            unsigned_txn,
            description,
            signer_address,
        }
    }
}

/// Returns `true` when `address` is a plausible Algorand public address:
/// exactly 58 ASCII letters and digits. Checksum bytes are not verified.
pub fn is_valid_algorand_address(address: &str) -> bool {
    address.len() == 58 && address.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Extracts an Algorand address from a scanned QR code. Accepts either a
/// plain address or an `algorand://<address>` URI, with a case-insensitive
/// scheme.
pub fn parse_qr_code(qr: &str) -> Option<&str> {
    if is_valid_algorand_address(qr) {
        return Some(qr);
    }
    let (scheme, address) = qr.split_once("://")?;
    (scheme.eq_ignore_ascii_case("algorand") && is_valid_algorand_address(address))
        .then_some(address)
}

/// The session's wallets and pending signature requests.
///
/// Owned by the API layer as the single writer; all mutation goes through
/// the narrow interface below.
#[derive(Debug, Default)]
pub struct Registry {
    wallets: Vec<Wallet>,
    pending: Vec<SignatureRequest>,
}

impl Registry {
    pub fn new(wallets: Vec<Wallet>) -> Self {
        Self {
            wallets,
            pending: Vec::new(),
        }
    }

    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn add_wallet(&mut self, wallet: Wallet) {
        self.wallets.push(wallet);
    }

    /// Removes the wallet with the given ID. Returns `false` if no such
    /// wallet was connected.
    pub fn remove_wallet(&mut self, id: Uuid) -> bool {
        let len = self.wallets.len();
        self.wallets.retain(|wallet| wallet.id != id);
        self.wallets.len() < len
    }

    /// Replaces the wallet list with its refreshed counterpart.
    pub fn replace_wallets(&mut self, wallets: Vec<Wallet>) {
        self.wallets = wallets;
    }

    pub fn pending_requests(&self) -> &[SignatureRequest] {
        &self.pending
    }

    pub fn queue_request(&mut self, request: SignatureRequest) {
        self.pending.push(request);
    }

    /// Resolves (removes) a processed signature request. Returns `false` if
    /// the ID was not pending.
    pub fn resolve_request(&mut self, id: Uuid) -> bool {
        let len = self.pending.len();
        self.pending.retain(|request| request.id != id);
        self.pending.len() < len
    }
}
