#[cfg(test)]
mod tests {
    use reqwest::header::AUTHORIZATION;
    use reqwest::StatusCode;
    use std::sync::{Mutex, MutexGuard};
    use tarefas::api::{bearer_headers, remote_error, TokenStore};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    fn response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(http::Response::builder().status(status).body(body.to_string()).unwrap())
    }

    // Tests in this binary redirect HOME/LOCALAPPDATA; serialize them so
    // parallel tests cannot observe each other's directories.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct SessionTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SessionTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test]
    fn test_bearer_headers_format() {
        let headers = bearer_headers("T1").unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap().to_str().unwrap(), "Bearer T1");
    }

    #[tokio::test]
    async fn test_remote_error_extracts_json_error_field() {
        let err = remote_error(response(400, r#"{"error":"Usuário não encontrado!"}"#)).await;
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Usuário não encontrado!");
    }

    #[tokio::test]
    async fn test_remote_error_extracts_json_message_field() {
        let err = remote_error(response(401, r#"{"message":"Token inválido"}"#)).await;
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "Token inválido");
    }

    #[tokio::test]
    async fn test_remote_error_json_without_known_key_keeps_raw_body() {
        let body = r#"{"detail":"something else"}"#;
        let err = remote_error(response(422, body)).await;
        assert_eq!(err.message, body);
    }

    #[tokio::test]
    async fn test_remote_error_plain_text_body() {
        let err = remote_error(response(500, "internal failure")).await;
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "internal failure");
    }

    #[tokio::test]
    async fn test_remote_error_empty_body_falls_back_to_status_line() {
        let err = remote_error(response(404, "")).await;
        assert_eq!(err.message, StatusCode::NOT_FOUND.to_string());
    }

    #[tokio::test]
    async fn test_remote_error_whitespace_body_falls_back_to_status_line() {
        let err = remote_error(response(502, "  \n ")).await;
        assert_eq!(err.message, StatusCode::BAD_GATEWAY.to_string());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_token_round_trip(_ctx: &mut SessionTestContext) {
        let store = TokenStore::new().unwrap();
        store.write("T1").unwrap();
        assert_eq!(store.read().unwrap(), "T1");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_missing_token_reports_not_logged_in(_ctx: &mut SessionTestContext) {
        let store = TokenStore::new().unwrap();
        let err = store.read().unwrap_err();
        assert!(err.to_string().contains("Not signed in"));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_delete_removes_cached_token(_ctx: &mut SessionTestContext) {
        let store = TokenStore::new().unwrap();
        store.write("T1").unwrap();
        store.delete().unwrap();
        assert!(store.read().is_err());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_delete_without_token_is_not_an_error(_ctx: &mut SessionTestContext) {
        let store = TokenStore::new().unwrap();
        assert!(store.delete().is_ok());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_overwriting_token_keeps_latest(_ctx: &mut SessionTestContext) {
        let store = TokenStore::new().unwrap();
        store.write("T1").unwrap();
        store.write("T2").unwrap();
        assert_eq!(store.read().unwrap(), "T2");
    }
}
