// src/formatting/tree_walker.rs
//! Recursive realization of a document's content tree into Markdown.
//!
//! Children are fetched lazily, one block at a time and strictly in document
//! order, only for the container kinds whose nested content belongs to
//! their rendering.

use super::block_renderer::{render_block, RenderConfig};
use crate::api::NotionRepository;
use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::error::AppError;
use crate::model::Block;
use crate::types::NotionId;
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

/// IDs on the path from the document root to the block being expanded.
/// Persistent so each recursion level extends it without copying.
type Ancestors = im::HashSet<NotionId>;

/// Walks content trees through a [`NotionRepository`].
///
/// Holds no state between calls besides the repository handle.
#[derive(Clone)]
pub struct TreeWalker {
    repository: Arc<dyn NotionRepository>,
}

impl TreeWalker {
    pub fn new(repository: Arc<dyn NotionRepository>) -> Self {
        Self { repository }
    }

    /// Renders every top-level block of `root` and their eligible descendants.
    ///
    /// Failing to list the root's own children is an error; failures deeper
    /// in the tree are logged and rendered as empty nested content.
    pub async fn render_document(
        &self,
        root: &NotionId,
        config: &RenderConfig,
    ) -> Result<String, AppError> {
        let blocks = self.repository.retrieve_children(root).await?;
        log::debug!("Rendering {} top-level blocks of {}", blocks.len(), root);

        let ancestors = Ancestors::unit(root.clone());
        Ok(self.render_sequence(&blocks, config, &ancestors).await)
    }

    fn render_sequence<'a>(
        &'a self,
        blocks: &'a [Block],
        config: &'a RenderConfig,
        ancestors: &'a Ancestors,
    ) -> BoxFuture<'a, String> {
        async move {
            let mut output = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);
            for block in blocks {
                let children_text = self.render_children_of(block, config, ancestors).await;
                output.push_str(&render_block(block, config, &children_text));
            }
            output
        }
        .boxed()
    }

    async fn render_children_of(
        &self,
        block: &Block,
        config: &RenderConfig,
        ancestors: &Ancestors,
    ) -> String {
        if !config.include_children || !block.supports_children() || !block.has_children() {
            return String::new();
        }

        let id = NotionId::from(block.id());
        if ancestors.contains(&id) {
            log::warn!(
                "Block {} appears among its own ancestors; not expanding it again",
                id
            );
            return String::new();
        }

        match self.repository.retrieve_children(&id).await {
            Ok(children) => {
                log::debug!(
                    "Expanding {} children of {} block {}",
                    children.len(),
                    block.block_type(),
                    id
                );
                let ancestors = ancestors.update(id);
                self.render_sequence(&children, config, &ancestors).await
            }
            Err(e) if e.is_not_found() => {
                log::warn!("Children of block {} are not accessible: {}", id, e);
                String::new()
            }
            Err(e) => {
                log::warn!("Failed to fetch children of block {}: {}", id, e);
                String::new()
            }
        }
    }
}
