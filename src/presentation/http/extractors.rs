// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, ports::storage::ImageUpload},
    presentation::http::state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{FromRequest, FromRequestParts, Multipart, Query, Request, multipart::MultipartError},
    http::{StatusCode, header::CONTENT_TYPE, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::{Deserialize, de::DeserializeOwned};
use utoipa::ToSchema;

use super::error::HttpError;

/// Multipart field carrying the post's image.
pub const IMAGE_FIELD: &str = "featuredImage";

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                tracing::error!("HttpState extension missing from router");
                HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| HttpError::unauthorized("Not authorized, no token"))?;

        let user = app_state
            .services
            .authenticate(header.token())
            .await
            .map_err(|_| HttpError::unauthorized("Not authorized, token failed"))?;

        Ok(Self(user))
    }
}

/// `Json` whose rejections use the error envelope.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// `Query` whose rejections use the error envelope.
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Client-editable post fields, shared by JSON and multipart bodies.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PostFields {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Category id.
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub slug: Option<String>,
}

impl PostFields {
    fn set(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = Some(value),
            "content" => self.content = Some(value),
            "category" => self.category = Some(value),
            "excerpt" => self.excerpt = Some(value),
            "slug" => self.slug = Some(value),
            other => tracing::debug!(field = other, "ignoring unknown form field"),
        }
    }
}

/// Post body sent either as JSON or as `multipart/form-data` with an
/// optional image in the `featuredImage` field.
#[derive(Debug, Default)]
pub struct PostForm {
    pub fields: PostFields,
    pub image: Option<ImageUpload>,
}

fn multipart_error(err: MultipartError) -> HttpError {
    HttpError::new(err.status(), err.body_text())
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"))
}

impl<S> FromRequest<S> for PostForm
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let ApiJson(fields) = ApiJson::<PostFields>::from_request(req, state).await?;
            return Ok(Self {
                fields,
                image: None,
            });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;

        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if name == IMAGE_FIELD {
                let file_name = field.file_name().map(str::to_owned);
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_owned();
                let data = field.bytes().await.map_err(multipart_error)?;
                // browsers send an empty part when no file was picked
                if !data.is_empty() {
                    form.image = Some(ImageUpload {
                        file_name,
                        content_type,
                        data,
                    });
                }
            } else {
                let value = field.text().await.map_err(multipart_error)?;
                form.fields.set(&name, value);
            }
        }

        Ok(form)
    }
}

/// Reads a positive integer query value, ignoring anything unparsable.
pub fn lenient_u32(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_numbers() {
        assert_eq!(lenient_u32(Some("3")), Some(3));
        assert_eq!(lenient_u32(Some(" 7 ")), Some(7));
        assert_eq!(lenient_u32(Some("0")), None);
        assert_eq!(lenient_u32(Some("-2")), None);
        assert_eq!(lenient_u32(Some("ten")), None);
        assert_eq!(lenient_u32(None), None);
    }
}
