use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::client::session::Session;
use crate::models::{
    categories::{Category, CreateCategoryRequest, UpdateCategoryRequest},
    recipes::{CreateRecipeRequest, Recipe, UpdateRecipeRequest},
    users::{AuthResult, LoginUser, PublicUser, RegisterUser},
};

/// Shown when a failed response carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Operacija nije uspjela.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// A mutating call was attempted without a logged-in session.
    #[error("Nema tokena (prijavi se ponovo).")]
    NotAuthenticated,

    /// The server answered with an error status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The request never produced a usable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Text to show the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::NotAuthenticated | ClientError::Api { .. } => self.to_string(),
            ClientError::Http(_) => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: PublicUser,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

/// HTTP client for the `/api` routes.
///
/// Holds the current [`Session`]; write methods refuse to send anything while
/// it is anonymous, and otherwise attach `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// `base_url` is the server origin, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_session(base_url, Session::Anonymous)
    }

    /// Resumes a session restored from storage.
    pub fn with_session(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn logout(&mut self) {
        self.session = Session::Anonymous;
    }

    pub async fn health(&self) -> ClientResult<serde_json::Value> {
        let response = self.request(Method::GET, "/health").send().await?;
        decode(response).await
    }

    /// Creates an account. The session is left unchanged; the user logs in
    /// afterwards.
    pub async fn register(&self, full_name: &str, email: &str, password: &str) -> ClientResult<PublicUser> {
        let body = RegisterUser {
            full_name: Some(full_name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };
        let response = self.request(Method::POST, "/auth/register").json(&body).send().await?;
        let auth: AuthResponse = decode(response).await?;
        Ok(auth.user)
    }

    /// Logs in and stores the returned token as the current session.
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<&Session> {
        let body = LoginUser {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };
        let response = self.request(Method::POST, "/auth/login").json(&body).send().await?;
        let auth: AuthResponse = decode(response).await?;

        self.session = Session::from(AuthResult {
            token: auth.token,
            user: auth.user,
        });
        Ok(&self.session)
    }

    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        let response = self.request(Method::GET, "/categories").send().await?;
        decode(response).await
    }

    pub async fn create_category(&self, name: &str) -> ClientResult<Category> {
        let body = CreateCategoryRequest {
            name: Some(name.to_string()),
        };
        self.send_authorized(Method::POST, "/categories", Some(&body)).await
    }

    pub async fn update_category(&self, id: i64, changes: &UpdateCategoryRequest) -> ClientResult<Category> {
        self.send_authorized(Method::PUT, &format!("/categories/{}", id), Some(changes))
            .await
    }

    /// Returns the server's confirmation message.
    pub async fn delete_category(&self, id: i64) -> ClientResult<String> {
        let response: MessageResponse = self
            .send_authorized::<(), _>(Method::DELETE, &format!("/categories/{}", id), None)
            .await?;
        Ok(response.message)
    }

    pub async fn list_recipes(&self) -> ClientResult<Vec<Recipe>> {
        let response = self.request(Method::GET, "/recipes").send().await?;
        decode(response).await
    }

    pub async fn get_recipe(&self, id: i64) -> ClientResult<Recipe> {
        let response = self.request(Method::GET, &format!("/recipes/{}", id)).send().await?;
        decode(response).await
    }

    pub async fn create_recipe(&self, recipe: &CreateRecipeRequest) -> ClientResult<Recipe> {
        self.send_authorized(Method::POST, "/recipes", Some(recipe)).await
    }

    pub async fn update_recipe(&self, id: i64, changes: &UpdateRecipeRequest) -> ClientResult<Recipe> {
        self.send_authorized(Method::PUT, &format!("/recipes/{}", id), Some(changes))
            .await
    }

    /// Returns the server's confirmation message.
    pub async fn delete_recipe(&self, id: i64) -> ClientResult<String> {
        let response: MessageResponse = self
            .send_authorized::<(), _>(Method::DELETE, &format!("/recipes/{}", id), None)
            .await?;
        Ok(response.message)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}/api{}", self.base_url, path))
    }

    async fn send_authorized<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.session.token().ok_or(ClientError::NotAuthenticated)?;

        let mut builder = self.request(method, path).bearer_auth(token);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        decode(response).await
    }
}

/// Parses a success body as `T`, or turns an error body into
/// [`ClientError::Api`] using its `message` field.
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());

    Err(ClientError::Api { status, message })
}
