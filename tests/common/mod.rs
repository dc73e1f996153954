use axum_test::TestServer;
use chat_board::core::AppState;
use chat_board::repositories::InMemoryMessageRepository;
use std::sync::Arc;

/// Crea un AppState per i test con lo store in memoria
///
/// # Returns
/// Arc<AppState> vuoto, da tenere nel test per ispezionare lo store
pub fn create_test_state() -> Arc<AppState<InMemoryMessageRepository>> {
    Arc::new(AppState::new(InMemoryMessageRepository::new()))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState<InMemoryMessageRepository>>) -> TestServer {
    let app = chat_board::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Invia il form della chat con il body indicato
pub async fn submit(server: &TestServer, body: &str) -> axum_test::TestResponse {
    server.post("/chat").form(&[("message[body]", body)]).await
}
