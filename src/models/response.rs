use serde::Serialize;

use crate::config;
use crate::models::comparison::Units;

// ---------------------------------------------------------------------------
// ResponseData — Success payload
// ---------------------------------------------------------------------------

/// Payload of a successful purchasing-power answer.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseData {
    pub amz_product_id: String,
    pub product_url: String,
    pub product_price: f64,
    pub units: Units,
    pub change: f64,
    pub msg: String,
    pub currency_value: f64,
}

// ---------------------------------------------------------------------------
// Response — The three outbound JSON shapes
// ---------------------------------------------------------------------------

/// Outbound response value. Serializes untagged into one of:
///
/// - `{"response": "ok", "data": {...}}`
/// - `{"response": "error", "msg": "..."}`
/// - `{"msg": "..."}` (guidance when no recognized parameters were sent)
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    Ok { response: String, data: ResponseData },
    Error { response: String, msg: String },
    Guidance { msg: String },
}

impl Response {
    pub fn ok(data: ResponseData) -> Self {
        Response::Ok {
            response: "ok".to_string(),
            data,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Response::Error {
            response: "error".to_string(),
            msg: msg.into(),
        }
    }

    pub fn guidance() -> Self {
        Response::Guidance {
            msg: config::GUIDANCE_MSG.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok { .. })
    }

    /// Error or guidance message, if this is not a success response.
    pub fn msg(&self) -> Option<&str> {
        match self {
            Response::Ok { .. } => None,
            Response::Error { msg, .. } | Response::Guidance { msg } => Some(msg),
        }
    }
}
