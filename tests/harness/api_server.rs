use std::time::Duration;

use habitpet::adapter::inbound::http::{self, AppState};
use habitpet::adapter::outbound::sqlite::SqliteStore;
use habitpet::api::HttpPetApi;
use habitpet::application::auth::{PasswordHasher, TokenService};
use habitpet::application::seed::Seeder;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::temp_db::TempDb;

pub const TEST_SECRET: &str = "test-secret-that-is-at-least-32-bytes-long";

/// A seeded database served on an ephemeral localhost port.
pub struct ApiServer {
    pub db: TempDb,
    url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<habitpet::error::Result<()>>>,
}

impl ApiServer {
    pub async fn start() -> Self {
        let db = TempDb::create();
        let hasher = PasswordHasher::with_cost(1024, 1).expect("argon2 params");
        Seeder::new(db.store(), hasher.clone())
            .run()
            .await
            .expect("seed");

        let store = SqliteStore::new(db.store().pool().clone());
        let tokens = TokenService::new(TEST_SECRET, chrono::Duration::hours(1));
        let state = AppState::new(store, hasher, tokens);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let url = format!("http://{}", listener.local_addr().expect("local addr"));
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(http::serve(listener, state, async move {
            let _ = rx.await;
        }));

        Self {
            db,
            url,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn client(&self) -> HttpPetApi {
        HttpPetApi::new(&self.url, Duration::from_secs(5)).expect("client")
    }

    /// A client signed in as `email` with the seeded password.
    pub async fn signed_in(&self, email: &str) -> HttpPetApi {
        let client = self.client();
        let session = client
            .login(email, habitpet::application::seed::data::DEFAULT_PASSWORD)
            .await
            .expect("login");
        client.with_token(session.token)
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await.expect("server task").expect("server result");
        }
    }
}
