//! Interactive HTML rendering of the knowledge graph
//!
//! Serializes the node/edge payload into a self-contained HTML document
//! built on vis-network. The document is staged through a named temp file
//! and read back before the file is deleted; each render owns its temp file
//! exclusively.

use std::io::Write;

use paperlens_core::{GraphStyleConfig, PaperLensError, Result};

use crate::KnowledgeGraph;

const TEMPLATE: &str = include_str!("templates/graph.html");

/// Renders a `KnowledgeGraph` to an interactive HTML document
pub struct GraphRenderer {
    style: GraphStyleConfig,
}

impl GraphRenderer {
    /// Create a renderer with the given styling
    pub fn new(style: GraphStyleConfig) -> Self {
        Self { style }
    }

    /// Render the graph to a self-contained HTML string
    pub fn render(&self, graph: &KnowledgeGraph) -> Result<String> {
        let data = serde_json::to_string(&graph.to_vis_data())
            .map_err(|e| PaperLensError::RenderError(e.to_string()))?;

        let html = TEMPLATE
            .replace("__HEIGHT__", &self.style.height)
            .replace("__WIDTH__", &self.style.width)
            .replace("__BACKGROUND__", &self.style.background)
            .replace("__FONT_COLOR__", &self.style.font_color)
            .replace("__PHYSICS__", if self.style.physics { "true" } else { "false" })
            .replace("__GRAPH_DATA__", &data);

        self.stage_through_temp_file(&html)
    }

    /// Write the document to a scoped temp file and read it back.
    ///
    /// The temp file is removed when the handle drops, so the rendered
    /// document never outlives the request that produced it.
    fn stage_through_temp_file(&self, html: &str) -> Result<String> {
        let mut file = tempfile::Builder::new()
            .prefix("paperlens-graph-")
            .suffix(".html")
            .tempfile()
            .map_err(|e| PaperLensError::RenderError(e.to_string()))?;

        file.write_all(html.as_bytes())
            .map_err(|e| PaperLensError::RenderError(e.to_string()))?;

        std::fs::read_to_string(file.path())
            .map_err(|e| PaperLensError::RenderError(e.to_string()))
    }
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new(GraphStyleConfig::default())
    }
}
