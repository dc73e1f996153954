//! Integration tests per gli endpoints della chat

mod common;

#[cfg(test)]
mod chat_tests {
    use super::common::{create_test_server, create_test_state, submit};
    use axum_test::http::StatusCode;
    use chat_board::repositories::ReadAll;

    // ============================================================
    // Test per GET /
    // ============================================================

    #[tokio::test]
    async fn test_root_health_check() {
        let server = create_test_server(create_test_state());

        let response = server.get("/").await;

        response.assert_status_ok();
        response.assert_text("Server is running!");
    }

    // ============================================================
    // Test per GET /chat - show_chat
    // ============================================================

    #[tokio::test]
    async fn test_get_chat_without_messages() {
        let server = create_test_server(create_test_state());

        let response = server.get("/chat").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<ul id=\"messages\">\n</ul>"), "La lista deve essere vuota");
        assert!(html.contains("name=\"message[body]\""), "Il form deve essere presente");
        assert!(html.contains("required></textarea>"), "Il form deve essere vuoto");
        assert!(!html.contains("form-errors"));
    }

    // ============================================================
    // Test per POST /chat - submit_message
    // ============================================================

    #[tokio::test]
    async fn test_post_valid_message_redirects() {
        let state = create_test_state();
        let server = create_test_server(state.clone());

        let response = submit(&server, "hello").await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/chat");

        let stored = state.msg.read_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].body, "hello");
    }

    #[tokio::test]
    async fn test_post_empty_message_shows_error() {
        let state = create_test_state();
        let server = create_test_server(state.clone());

        let response = submit(&server, "").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("form-errors"));
        assert!(html.contains("Message body must not be blank"));
        assert!(state.msg.is_empty(), "Nessun messaggio deve essere salvato");
    }

    #[tokio::test]
    async fn test_post_whitespace_message_shows_error() {
        let state = create_test_state();
        let server = create_test_server(state.clone());

        let response = submit(&server, "   \n  ").await;

        response.assert_status_ok();
        assert!(response.text().contains("Message body must not be blank"));
        assert!(state.msg.is_empty());
    }

    #[tokio::test]
    async fn test_post_without_field_shows_error() {
        let state = create_test_state();
        let server = create_test_server(state.clone());

        let response = server.post("/chat").form(&[("other", "value")]).await;

        response.assert_status_ok();
        assert!(response.text().contains("Message body must not be blank"));
        assert!(state.msg.is_empty());
    }

    #[tokio::test]
    async fn test_post_too_long_message_keeps_existing_list() {
        let state = create_test_state();
        let server = create_test_server(state.clone());
        submit(&server, "already here").await;

        let response = submit(&server, &"x".repeat(5001)).await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Message body must be at most 5000 characters"));
        assert!(html.contains("already here"), "La lista va renderizzata comunque");
        assert_eq!(state.msg.len(), 1);
    }

    #[tokio::test]
    async fn test_post_html_is_escaped() {
        let server = create_test_server(create_test_state());

        submit(&server, "<script>alert(1)</script>").await;

        let html = server.get("/chat/messages").await.text();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    // ============================================================
    // Test per GET /chat/messages - list_messages
    // ============================================================

    #[tokio::test]
    async fn test_list_after_n_submissions() {
        let server = create_test_server(create_test_state());

        for i in 0..5 {
            submit(&server, &format!("message {}", i)).await;
        }

        let response = server.get("/chat/messages").await;

        response.assert_status_ok();
        let html = response.text();
        assert_eq!(html.matches("<li ").count(), 5);
        for i in 0..5 {
            assert!(html.contains(&format!("message {}</li>", i)));
        }
        assert!(!html.contains("<form"), "Il frammento non contiene il form");
    }

    #[tokio::test]
    async fn test_list_is_idempotent() {
        let server = create_test_server(create_test_state());
        submit(&server, "one").await;
        submit(&server, "two").await;

        let first = server.get("/chat/messages").await.text();
        let second = server.get("/chat/messages").await.text();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_submit_then_poll_end_to_end() {
        let server = create_test_server(create_test_state());

        let response = submit(&server, "hello").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/chat");

        let html = server.get("/chat/messages").await.text();
        assert_eq!(html.matches("<li ").count(), 1);
        assert!(html.contains("hello</li>"));

        let page = server.get("/chat").await.text();
        assert!(page.contains("hello</li>"));
    }

    // ============================================================
    // Storage non disponibile
    // ============================================================

    #[tokio::test]
    async fn test_storage_unavailable_returns_500() {
        let state = create_test_state();
        let server = create_test_server(state.clone());
        state.msg.set_available(false);

        server
            .get("/chat")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        server
            .get("/chat/messages")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let response = submit(&server, "lost").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.text().contains("Storage unavailable"));

        state.msg.set_available(true);
        assert!(state.msg.is_empty());
    }
}
