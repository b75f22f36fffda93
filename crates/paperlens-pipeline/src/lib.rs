//! PaperLens Pipeline - End-to-end paper analysis
//!
//! Runs the full chain for one uploaded paper: parse the document to raw
//! text, extract named entities, bucket the consumed labels, build the
//! knowledge graph and render it to an embeddable HTML document. The API
//! and CLI both go through this crate so they cannot drift apart.

use serde::Serialize;
use tracing::{debug, info};

use paperlens_core::{AppConfig, EntityBuckets, PaperLensError, Result};
use paperlens_extractor::bucket::bucket_entities;
use paperlens_extractor::ner::RuleBasedNer;
use paperlens_extractor::EntityExtractor;
use paperlens_graph::{GraphRenderer, KnowledgeGraph};
use paperlens_parser::ParserRegistry;

/// Result of analyzing one paper
#[derive(Debug, Clone, Serialize)]
pub struct PaperAnalysis {
    /// Original file name
    pub file_name: String,
    /// Detected file type
    pub file_type: String,
    /// Number of pages, when the format has pages
    pub page_count: Option<u32>,
    /// Character count of the extracted text
    pub char_count: usize,
    /// Word count of the extracted text
    pub word_count: usize,
    /// Deduplicated entity sets
    pub entities: EntityBuckets,
    /// Node count of the knowledge graph
    pub node_count: usize,
    /// Edge count of the knowledge graph
    pub edge_count: usize,
    /// Self-contained interactive HTML visualization
    pub graph_html: String,
}

/// The full analysis pipeline: parser registry, NER engine and renderer
pub struct Pipeline {
    registry: ParserRegistry,
    ner: RuleBasedNer,
    renderer: GraphRenderer,
    config: AppConfig,
}

impl Pipeline {
    /// Create a pipeline from application configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            registry: ParserRegistry::with_defaults(),
            ner: RuleBasedNer::new(),
            renderer: GraphRenderer::new(config.graph.clone()),
            config,
        }
    }

    /// Analyze an uploaded paper held in memory.
    ///
    /// Parsing is synchronous and can be CPU-heavy for large PDFs; async
    /// callers should move this onto a blocking thread.
    pub fn analyze_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<PaperAnalysis> {
        info!(file_name, size = bytes.len(), "Analyzing paper");

        let document = self
            .registry
            .parse_bytes(file_name, bytes)
            .map_err(|e| PaperLensError::ParseError(e.to_string()))?;

        debug!(
            file_type = %document.file_type,
            chars = document.char_count(),
            "Document parsed"
        );

        let entities = self.ner.extract(&document.content)?;
        let buckets = bucket_entities(&entities);

        debug!(
            detected = entities.len(),
            kept = buckets.len(),
            "Entities extracted"
        );

        let graph = KnowledgeGraph::build(&buckets, &self.config.graph);
        let graph_html = self.renderer.render(&graph)?;

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Analysis complete"
        );

        Ok(PaperAnalysis {
            file_name: document.file_name.clone(),
            file_type: document.file_type.to_string(),
            page_count: document.page_count,
            char_count: document.char_count(),
            word_count: document.word_count(),
            entities: buckets,
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            graph_html,
        })
    }

    /// Analyze a paper on disk
    pub fn analyze_path(&self, path: &std::path::Path) -> Result<PaperAnalysis> {
        let bytes = std::fs::read(path).map_err(|e| {
            PaperLensError::InvalidInput(format!("cannot read {}: {e}", path.display()))
        })?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document");

        self.analyze_bytes(name, &bytes)
    }

    /// The configuration this pipeline was built with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
