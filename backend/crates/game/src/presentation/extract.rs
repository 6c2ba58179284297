//! Request Extractors

use crate::error::GameError;
use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejection is a [`GameError`].
///
/// The stock `Json` extractor answers a malformed body (missing field,
/// non-numeric score) with a framework 422 and a plain-text message;
/// routing the rejection through `GameError::InvalidRequest` keeps
/// every client fault on the 400 + reason-string surface.
pub struct GameJson<T>(pub T);

impl<S, T> FromRequest<S> for GameJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = GameError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(GameJson(value)),
            Err(rejection) => Err(GameError::InvalidRequest(rejection.body_text())),
        }
    }
}
