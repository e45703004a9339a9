use serde::{Deserialize, Serialize};

/// POST body for both list-append endpoints. The server assigns the id and
/// the variant flag; the client only ever supplies the hex string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddColorRequest {
    pub hex: String,
}

impl AddColorRequest {
    pub fn new(hex: impl Into<String>) -> Self {
        Self { hex: hex.into() }
    }
}
