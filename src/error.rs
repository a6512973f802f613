use std::fmt;
use std::panic::Location;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use tracing::{event, Level};

use crate::response::ApiResponse;

#[derive(Debug, Clone)]
pub struct RequestCtx {
    pub id: String,
    pub method: String,
    pub path: String,
    pub instance: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub inner: ApiErrorType,
    pub ctx: Option<RequestCtx>,
}

#[derive(Debug)]
pub enum ApiErrorType {
    BadRequest {
        message: String,
        location: &'static Location<'static>,
        module: String,
    },
    Unauthorized {
        message: String,
        location: &'static Location<'static>,
        module: String,
    },
    Upstream {
        message: String,
        location: &'static Location<'static>,
        module: String,
    },
    Reqwest {
        error: ReqwestError,
        location: &'static Location<'static>,
        module: String,
    },
    Serialization {
        error: SerdeJsonError,
        location: &'static Location<'static>,
        module: String,
    },
    Custom {
        status: StatusCode,
        message: String,
        location: &'static Location<'static>,
        module: String,
    },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.inner {
            ApiErrorType::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiErrorType::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiErrorType::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::Reqwest { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::Serialization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::Custom { status, .. } => *status,
        }
    }

    pub fn message(&self) -> String {
        match &self.inner {
            ApiErrorType::BadRequest { message, .. } => message.clone(),
            ApiErrorType::Unauthorized { message, .. } => message.clone(),
            ApiErrorType::Upstream { message, .. } => format!("Error scraping TikTok: {}", message),
            ApiErrorType::Reqwest { error, .. } => format!("Error scraping TikTok: {}", error),
            ApiErrorType::Serialization { error, .. } => format!("JSON serialization error: {}", error),
            ApiErrorType::Custom { message, .. } => message.clone(),
        }
    }

    pub fn location(&self) -> &'static Location<'static> {
        match &self.inner {
            ApiErrorType::BadRequest { location, .. } => location,
            ApiErrorType::Unauthorized { location, .. } => location,
            ApiErrorType::Upstream { location, .. } => location,
            ApiErrorType::Reqwest { location, .. } => location,
            ApiErrorType::Serialization { location, .. } => location,
            ApiErrorType::Custom { location, .. } => location,
        }
    }

    pub fn module(&self) -> &str {
        match &self.inner {
            ApiErrorType::BadRequest { module, .. } => module,
            ApiErrorType::Unauthorized { module, .. } => module,
            ApiErrorType::Upstream { module, .. } => module,
            ApiErrorType::Reqwest { module, .. } => module,
            ApiErrorType::Serialization { module, .. } => module,
            ApiErrorType::Custom { module, .. } => module,
        }
    }

    pub fn with_ctx(mut self, ctx: RequestCtx) -> Self {
        self.ctx = Some(ctx);
        self
    }

    fn log_error(&self) {
        let status = self.status_code();
        let message = self.message();
        let location = self.location();
        let module = self.module();

        // Log with request context if available
        if let Some(ctx) = &self.ctx {
            event!(
                Level::ERROR,
                status = status.as_u16(),
                message = %message,
                module = %module,
                file = %location.file(),
                line = %location.line(),
                request_id = %ctx.id,
                method = %ctx.method,
                path = %ctx.path,
                instance = %ctx.instance,
                "API Error occurred"
            );
        } else {
            event!(
                Level::ERROR,
                status = status.as_u16(),
                message = %message,
                module = %module,
                file = %location.file(),
                line = %location.line(),
                "API Error occurred"
            );
        }
    }
}

#[macro_export]
macro_rules! api_error {
    ($error_type:ident) => {
        $crate::error::ApiError {
            inner: $crate::error::ApiErrorType::$error_type {
                message: stringify!($error_type).to_string(),
                location: std::panic::Location::caller(),
                module: module_path!().to_string(),
            },
            ctx: None,
        }
    };
    ($error_type:ident, $msg:expr) => {
        $crate::error::ApiError {
            inner: $crate::error::ApiErrorType::$error_type {
                message: $msg.to_string(),
                location: std::panic::Location::caller(),
                module: module_path!().to_string(),
            },
            ctx: None,
        }
    };
}

impl From<ReqwestError> for ApiError {
    #[track_caller]
    fn from(error: ReqwestError) -> Self {
        ApiError {
            inner: ApiErrorType::Reqwest {
                error,
                location: Location::caller(),
                module: module_path!().to_string(),
            },
            ctx: None,
        }
    }
}

impl From<SerdeJsonError> for ApiError {
    #[track_caller]
    fn from(error: SerdeJsonError) -> Self {
        ApiError {
            inner: ApiErrorType::Serialization {
                error,
                location: Location::caller(),
                module: module_path!().to_string(),
            },
            ctx: None,
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(error: JsonRejection) -> Self {
        ApiError {
            inner: ApiErrorType::Custom {
                status: StatusCode::BAD_REQUEST,
                message: error.body_text(),
                location: Location::caller(),
                module: module_path!().to_string(),
            },
            ctx: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_error();

        let status = self.status_code();
        let message = self.message();
        let response = ApiResponse::<()>::error(Some(&message));
        (status, Json(response)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}
