use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// Common fields for all blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: BlockId,
    /// As reported by the API; children themselves are fetched on demand.
    pub has_children: bool,
}

impl BlockCommon {
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            has_children: false,
        }
    }

    pub fn with_children(mut self) -> Self {
        self.has_children = true;
        self
    }
}
