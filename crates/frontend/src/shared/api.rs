//! HTTP-клиент к REST API бэкенда (аналог fetchApi).
//!
//! Все запросы идут через `gloo-net`, подставляют `Authorization: Bearer <token>`
//! из localStorage и сводят ответы к `Result<T, ApiError>`. Ответ 401 очищает
//! токен и уводит пользователя на страницу входа.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::api_utils::api_url;
use super::config::config;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Сессия истекла, войдите снова")]
    Unauthorized,
    #[error("Недостаточно прав для операции")]
    Forbidden,
    #[error("Запись не найдена")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Ошибка сервера (HTTP {status})")]
    Http { status: u16 },
    #[error("Сервер недоступен: {0}")]
    Network(String),
    #[error("Некорректный ответ сервера: {0}")]
    Parse(String),
}

impl ApiError {
    /// Разбор неуспешного ответа. Для 400/409/422 достаёт сообщение бэкенда
    /// из `{"message": ...}` или `{"error": ...}`.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            400 | 409 | 422 => ApiError::Validation(
                extract_message(body).unwrap_or_else(|| format!("Некорректные данные (HTTP {})", status)),
            ),
            _ => ApiError::Http { status },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let field = |name: &str| {
        value
            .get(name)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    field("message").or_else(|| field("error"))
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Сброс сессии и переход на страницу входа.
/// На самой странице входа 401 означает неверный пароль, перехода нет.
pub fn redirect_to_login() {
    storage::clear_tokens();
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    if location.pathname().ok().as_deref() == Some(config().login_route) {
        return;
    }
    let _ = location.set_href(config().login_route);
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    if err.is_auth() {
        log::warn!("HTTP 401 on {}", response.url());
        redirect_to_login();
    } else {
        log::error!("HTTP {} on {}: {}", status, response.url(), err);
    }
    Err(err)
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
    with_auth(builder)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

fn build_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    with_auth(builder)
        .json(body)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// GET `path` → `T`
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = build(Request::get(&api_url(path)))?;
    parse(send(request).await?).await
}

/// POST JSON → `T`
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = build_json(Request::post(&api_url(path)), body)?;
    parse(send(request).await?).await
}

/// PUT JSON, тело ответа игнорируется
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = build_json(Request::put(&api_url(path)), body)?;
    send(request).await.map(|_| ())
}

/// PATCH JSON, тело ответа игнорируется
pub async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = build_json(Request::patch(&api_url(path)), body)?;
    send(request).await.map(|_| ())
}

/// POST без ожидаемого тела ответа
pub async fn post_empty<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = build_json(Request::post(&api_url(path)), body)?;
    send(request).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let request = build(Request::delete(&api_url(path)))?;
    send(request).await.map(|_| ())
}

/// Ответ на создание записи: `{"id": "..."}`
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, ""), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, "{}"), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500, "oops"), ApiError::Http { status: 500 });
        assert!(ApiError::from_status(401, "").is_auth());
    }

    #[test]
    fn test_validation_message_from_body() {
        assert_eq!(
            ApiError::from_status(422, r#"{"message":"Позиция уже занята"}"#),
            ApiError::Validation("Позиция уже занята".into())
        );
        assert_eq!(
            ApiError::from_status(400, r#"{"error":"slug exists"}"#),
            ApiError::Validation("slug exists".into())
        );
        assert_eq!(
            ApiError::from_status(409, "not json").to_string(),
            "Некорректные данные (HTTP 409)"
        );
    }
}
