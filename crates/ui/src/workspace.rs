//! Application wiring: stores, authenticator and every screen in one place.

use std::sync::Arc;

use stockroom_auth::{Authenticator, StaticAuthenticator};
use stockroom_infra::{InMemoryRecordStore, RecordStore};
use stockroom_inventory::{InventoryItem, MaterialDispatch, MaterialReceiving, sample};

use crate::config::{AppConfig, ConfigError};
use crate::screens::{
    DashboardScreen, DispatchScreen, InventoryScreen, LoginScreen, ReceivingScreen, ReportsScreen,
};

pub type ItemStore = Arc<InMemoryRecordStore<InventoryItem>>;
pub type ReceiptStore = Arc<InMemoryRecordStore<MaterialReceiving>>;
pub type DispatchStore = Arc<InMemoryRecordStore<MaterialDispatch>>;

/// One store per record family. Handles are shared with the screens.
#[derive(Debug, Clone, Default)]
pub struct Stores {
    pub items: ItemStore,
    pub receipts: ReceiptStore,
    pub dispatches: DispatchStore,
}

impl Stores {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            items: Arc::new(InMemoryRecordStore::with_records(sample::inventory_items())),
            receipts: Arc::new(InMemoryRecordStore::with_records(sample::receipts())),
            dispatches: Arc::new(InMemoryRecordStore::with_records(sample::dispatches())),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        if config.seed_sample_data {
            Self::seeded()
        } else {
            Self::empty()
        }
    }
}

pub struct Workspace<A = StaticAuthenticator> {
    pub config: AppConfig,
    pub stores: Stores,
    pub auth: A,
    pub login: LoginScreen,
    pub dashboard: DashboardScreen,
    pub inventory: InventoryScreen<ItemStore>,
    pub receiving: ReceivingScreen<ReceiptStore>,
    pub dispatch: DispatchScreen<DispatchStore>,
    pub reports: ReportsScreen,
}

impl Workspace<StaticAuthenticator> {
    /// Workspace that signs in against the configured demo credentials.
    pub fn from_config(config: AppConfig) -> Self {
        let auth = StaticAuthenticator::new(config.credentials.clone());
        Self::with_authenticator(config, auth)
    }
}

impl<A: Authenticator> Workspace<A> {
    pub fn with_authenticator(config: AppConfig, auth: A) -> Self {
        let stores = Stores::from_config(&config);
        let mode = config.create_mode;

        tracing::debug!(
            create_mode = mode.as_str(),
            items = RecordStore::<InventoryItem>::len(&stores.items),
            receipts = RecordStore::<MaterialReceiving>::len(&stores.receipts),
            dispatches = RecordStore::<MaterialDispatch>::len(&stores.dispatches),
            "workspace ready"
        );

        Self {
            inventory: InventoryScreen::new(stores.items.clone(), mode),
            receiving: ReceivingScreen::new(stores.receipts.clone(), mode),
            dispatch: DispatchScreen::new(stores.dispatches.clone(), mode),
            login: LoginScreen::new(),
            dashboard: DashboardScreen::new(),
            reports: ReportsScreen::new(),
            config,
            stores,
            auth,
        }
    }

    /// Submit the login form against this workspace's authenticator.
    pub async fn sign_in(&mut self) -> bool {
        self.login.submit(&mut self.auth).await
    }

    pub fn sign_out(&mut self) {
        self.auth.logout();
        self.login = LoginScreen::new();
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth.is_authenticated()
    }
}

/// Load configuration from the environment, install logging and build the
/// workspace.
pub fn bootstrap() -> Result<Workspace, ConfigError> {
    let config = AppConfig::from_env()?;
    stockroom_observability::init(config.log_format, &config.log_filter);
    tracing::info!(
        create_mode = config.create_mode.as_str(),
        seed_sample_data = config.seed_sample_data,
        "starting stockroom"
    );
    Ok(Workspace::from_config(config))
}
