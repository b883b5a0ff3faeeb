//! Auth Endpoints

use reqwest::Method;

use super::{required, ApiClient};
use crate::error::ApiError;
use crate::models::{LoginCredentials, LoginResponse, RegisterRequest, RegisterResponse, User};

impl ApiClient {
    /// Exchange credentials for a token. Does not touch the stored token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let endpoint = "/login/";
        let credentials = LoginCredentials { username, password };
        required(self.request_json(Method::POST, endpoint, &credentials).await?, endpoint)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let endpoint = "/register/";
        let request = RegisterRequest { username, email, password };
        required(self.request_json(Method::POST, endpoint, &request).await?, endpoint)
    }

    /// Profile of the token's owner
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let endpoint = "/users/me/";
        required(self.request(Method::GET, endpoint, None).await?, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{FakeTaskServer, PASSWORD, TOKEN, USERNAME};

    #[tokio::test]
    async fn test_login_returns_token_and_profile() {
        let fake = FakeTaskServer::start().await;
        let client = crate::test_support::client_for(&fake.uri());

        let response = client.login(USERNAME, PASSWORD).await.unwrap();
        assert_eq!(response.token, TOKEN);
        assert_eq!(response.user.username, USERNAME);
        assert_eq!(client.token(), None);
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_server_message() {
        let fake = FakeTaskServer::start().await;
        let client = crate::test_support::client_for(&fake.uri());

        let err = client.login(USERNAME, "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid username or password");
    }

    #[tokio::test]
    async fn test_register_creates_account() {
        let fake = FakeTaskServer::start().await;
        let client = crate::test_support::client_for(&fake.uri());

        let response = client.register("carol", "carol@example.com", "s3cret-pass").await.unwrap();
        assert_eq!(response.user.email, "carol@example.com");
        assert_eq!(response.message.as_deref(), Some("Registration successful"));

        let err = client.register(USERNAME, "dup@example.com", "s3cret-pass").await.unwrap_err();
        assert_eq!(err.to_string(), "Username already exists");
    }
}
