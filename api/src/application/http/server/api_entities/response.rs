use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

/// JSON body with the status code it is sent with.
#[derive(Debug, Clone, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T),
    InternalServerError(T),
}

impl<T: Serialize> Response<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            Response::OK(_) => StatusCode::OK,
            Response::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        let status = self.status();
        match self {
            Response::OK(body) | Response::InternalServerError(body) => {
                (status, Json(body)).into_response()
            }
        }
    }
}
