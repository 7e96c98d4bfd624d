use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::backend::Provider;

/// Which settings of the remote backend are present, without their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPresence {
    pub has_url: bool,
    pub has_key: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DbStatusResponse {
    pub provider: Provider,
    pub connected: bool,
    pub config: ConfigPresence,
}
