use serde::Serialize;

/// Flat response envelope. Success payloads are flattened next to the
/// `success` flag; failures carry a `detail` string instead.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            detail: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(detail: Option<&str>) -> Self {
        Self {
            success: false,
            data: None,
            detail: detail.map(|m| m.to_string()),
        }
    }
}
