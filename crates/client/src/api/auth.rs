use http::Method;
use serde_json::Value;
use shared::{
    api::{
        self,
        payloads::{ChangePasswordRequest, LoginRequest, ProfileUpdate, RegisterRequest},
    },
    model::Role,
};
use tracing::debug;

use super::SessionClient;
use crate::{error::ClientError, storage::Storage, transport::Transport};

impl<S: Storage, T: Transport> SessionClient<S, T> {
    /// Creates an account. On success the returned token (and user, when the
    /// server includes one) becomes the current session
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Value, ClientError> {
        debug!("register({email}, {role})");
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        let data = self.send_json(Method::POST, api::Auth::Register.path(), &body).await?;
        self.remember_session(&data);
        Ok(data)
    }

    /// Signs in and stores the returned token and user
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ClientError> {
        debug!("login({email})");
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let data = self.send_json(Method::POST, api::Auth::Login.path(), &body).await?;
        self.remember_session(&data);
        Ok(data)
    }

    pub async fn get_profile(&self) -> Result<Value, ClientError> {
        self.get(api::Auth::Profile.path()).await
    }

    pub async fn update_profile(&self, updates: &ProfileUpdate) -> Result<Value, ClientError> {
        self.send_json(Method::PUT, api::Auth::Profile.path(), updates).await
    }

    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<Value, ClientError> {
        let body = ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.send_json(Method::POST, api::Auth::ChangePassword.path(), &body).await
    }

    /// Asks the server whether the stored token is still accepted
    pub async fn verify_token(&self) -> Result<Value, ClientError> {
        self.get(api::Auth::VerifyToken.path()).await
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use shared::model::{Role, User};
    use tokio_test::block_on;

    use super::*;
    use crate::{session::USER_KEY, storage::Storage, testing::client};

    #[test]
    fn test_login_stores_token_and_user() {
        let (client, _, transport) = client();
        transport.respond_json(200, json!({ "success": true, "token": "abc", "user": { "role": "student" } }));

        let data = block_on(client.login("asha@example.com", "hunter22")).unwrap();
        assert_eq!(data["token"], "abc");
        assert_eq!(client.get_token().as_deref(), Some("abc"));
        assert_eq!(client.get_user().unwrap().role.as_deref(), Some("student"));

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.endpoint(), "/auth/login");
        assert_eq!(request.json_body().unwrap(), json!({ "email": "asha@example.com", "password": "hunter22" }));
    }

    #[test]
    fn test_unsuccessful_login_leaves_session_alone() {
        let (client, _, transport) = client();
        transport.respond_json(200, json!({ "success": false, "token": "abc" }));
        block_on(client.login("asha@example.com", "wrong")).unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_rejected_login_is_an_error() {
        let (client, _, transport) = client();
        transport.respond_json(401, json!({ "success": false, "error": "Invalid email or password" }));
        let err = block_on(client.login("asha@example.com", "wrong")).unwrap_err();
        assert_eq!(err.message(), "Invalid email or password");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_register_stores_token_without_user() {
        let (client, storage, transport) = client();
        transport.respond_json(201, json!({ "success": true, "message": "Registered", "token": "new-token" }));

        block_on(client.register("Asha", "asha@example.com", "hunter22", Role::Instructor)).unwrap();
        assert_eq!(client.get_token().as_deref(), Some("new-token"));
        assert_eq!(storage.get(USER_KEY), None);

        let request = transport.last_request().unwrap();
        assert_eq!(request.endpoint(), "/auth/register");
        assert_eq!(
            request.json_body().unwrap(),
            json!({ "name": "Asha", "email": "asha@example.com", "password": "hunter22", "role": "instructor" })
        );
    }

    #[test]
    fn test_register_keeps_user_when_returned() {
        let (client, _, transport) = client();
        transport.respond_json(201, json!({ "success": true, "token": "t", "user": { "role": "student", "name": "Asha" } }));
        block_on(client.register("Asha", "asha@example.com", "pw", Role::Student)).unwrap();
        assert_eq!(client.get_user().unwrap().field("name"), Some(&json!("Asha")));
    }

    #[test]
    fn test_odd_auth_response_is_ignored() {
        let (client, _, transport) = client();
        transport.respond_json(200, json!({ "success": "yes", "token": 5 }));
        block_on(client.login("a@example.com", "pw")).unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_profile_endpoints() {
        let (client, _, transport) = client();
        client.set_user(User::with_role("student"));
        transport.respond(200, "{}").respond(200, "{}");

        block_on(client.get_profile()).unwrap();
        let update = ProfileUpdate { name: Some("Asha K".into()), ..Default::default() };
        block_on(client.update_profile(&update)).unwrap();

        let requests = transport.requests();
        assert_eq!((requests[0].method.clone(), requests[0].endpoint()), (Method::GET, "/auth/profile"));
        assert_eq!((requests[1].method.clone(), requests[1].endpoint()), (Method::PUT, "/auth/profile"));
        assert_eq!(requests[1].json_body().unwrap(), json!({ "name": "Asha K" }));
    }

    #[test]
    fn test_change_password_and_verify_token() {
        let (client, _, transport) = client();
        transport.respond(200, "{}").respond(200, r#"{"success":true,"valid":true}"#);

        block_on(client.change_password("old", "new")).unwrap();
        let data = block_on(client.verify_token()).unwrap();
        assert_eq!(data["valid"], true);

        let requests = transport.requests();
        assert_eq!(requests[0].endpoint(), "/auth/change-password");
        assert_eq!(requests[0].json_body().unwrap(), json!({ "old_password": "old", "new_password": "new" }));
        assert_eq!((requests[1].method.clone(), requests[1].endpoint()), (Method::GET, "/auth/verify-token"));
    }
}
