use serde::{Deserialize, Serialize};

/// A community place, as provided by the enclosing application.
///
/// Read-only input to announcement formatting; never persisted here.
/// Coordinates are always present; the street address is not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub category: Option<String>,
}
