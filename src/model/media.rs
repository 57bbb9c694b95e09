use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MediaDto {
    pub url: String,
    pub public_id: String,
    /// Either `image` or `video`.
    pub resource_type: String,
}
