use serde::{Deserialize, Serialize};

/// Failure body returned by every backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
