// SPDX-License-Identifier: MIT

mod ping;
mod post_traffic;
mod pre_traffic;

pub use ping::ping_handler;
pub use post_traffic::post_traffic_hook;
pub use pre_traffic::pre_traffic_hook;

use serde::{Deserialize, Serialize};

/// Response body shared by both lifecycle hooks
#[derive(Debug, Serialize, Deserialize)]
pub struct HookResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
