//! PaperLens Graph - Knowledge-graph construction
//!
//! Builds the naive entity graph for one analyzed paper: one node per
//! entity, and an edge from every author to every organization and every
//! citation. The all-pairs linking is a display heuristic, not an extracted
//! relationship, and is preserved deliberately.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;

use paperlens_core::{EntityBuckets, EntityCategory, GraphStyleConfig};

pub mod render;

pub use render::GraphRenderer;

/// A node in the knowledge graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    /// Entity text, doubling as the node identity
    pub name: String,
    /// Entity category
    pub category: EntityCategory,
    /// Display color
    pub color: String,
}

/// Knowledge graph for one analyzed paper
pub struct KnowledgeGraph {
    graph: UnGraph<GraphNode, ()>,
    index: HashMap<String, NodeIndex>,
}

impl KnowledgeGraph {
    /// Build the graph from entity buckets.
    ///
    /// Author nodes are added first; each organization and citation node is
    /// then linked to every author. Nodes are keyed by entity text: if the
    /// same text appears in more than one bucket the later category wins.
    pub fn build(buckets: &EntityBuckets, style: &GraphStyleConfig) -> Self {
        let mut kg = Self {
            graph: UnGraph::new_undirected(),
            index: HashMap::new(),
        };

        for author in &buckets.authors {
            kg.add_node(author, EntityCategory::Author, style);
        }

        for org in &buckets.organizations {
            let org_idx = kg.add_node(org, EntityCategory::Organization, style);
            for author in &buckets.authors {
                kg.link(author, org_idx);
            }
        }

        for citation in &buckets.citations {
            let cit_idx = kg.add_node(citation, EntityCategory::Citation, style);
            for author in &buckets.authors {
                kg.link(author, cit_idx);
            }
        }

        kg
    }

    /// Add or update a node keyed by entity text
    fn add_node(
        &mut self,
        name: &str,
        category: EntityCategory,
        style: &GraphStyleConfig,
    ) -> NodeIndex {
        let color = style.color_for(category).to_string();

        if let Some(&idx) = self.index.get(name) {
            let node = &mut self.graph[idx];
            node.category = category;
            node.color = color;
            return idx;
        }

        let idx = self.graph.add_node(GraphNode {
            name: name.to_string(),
            category,
            color,
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Add an edge from a named author node, at most once per pair
    fn link(&mut self, author: &str, target: NodeIndex) {
        if let Some(&author_idx) = self.index.get(author) {
            self.graph.update_edge(author_idx, target, ());
        }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate over nodes
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_indices().map(move |i| &self.graph[i])
    }

    /// Edges as (endpoint, endpoint) node pairs
    pub fn edges(&self) -> impl Iterator<Item = (&GraphNode, &GraphNode)> {
        self.graph
            .edge_indices()
            .filter_map(move |e| self.graph.edge_endpoints(e))
            .map(move |(a, b)| (&self.graph[a], &self.graph[b]))
    }

    /// Serializable node/edge payload for the visualization engine
    pub fn to_vis_data(&self) -> VisData {
        let nodes = self
            .graph
            .node_indices()
            .map(|i| {
                let node = &self.graph[i];
                VisNode {
                    id: i.index(),
                    label: node.name.clone(),
                    title: node.category.as_str(),
                    color: node.color.clone(),
                }
            })
            .collect();

        let edges = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| VisEdge {
                from: a.index(),
                to: b.index(),
            })
            .collect();

        VisData { nodes, edges }
    }
}

/// Node/edge payload consumed by the embedded visualization
#[derive(Debug, Clone, Serialize)]
pub struct VisData {
    pub nodes: Vec<VisNode>,
    pub edges: Vec<VisEdge>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisNode {
    pub id: usize,
    pub label: String,
    pub title: &'static str,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisEdge {
    pub from: usize,
    pub to: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperlens_core::NerLabel;
    use proptest::prelude::*;

    fn buckets(authors: &[&str], orgs: &[&str], citations: &[&str]) -> EntityBuckets {
        let mut b = EntityBuckets::new();
        for a in authors {
            b.insert(NerLabel::Person, *a);
        }
        for o in orgs {
            b.insert(NerLabel::Org, *o);
        }
        for c in citations {
            b.insert(NerLabel::Misc, *c);
        }
        b
    }

    fn style() -> GraphStyleConfig {
        GraphStyleConfig::default()
    }

    #[test]
    fn test_single_author_single_org() {
        let kg = KnowledgeGraph::build(&buckets(&["Jane Doe"], &["Acme Corp"], &[]), &style());

        assert_eq!(kg.node_count(), 2);
        assert_eq!(kg.edge_count(), 1);

        let (a, b) = kg.edges().next().unwrap();
        let categories = [a.category, b.category];
        assert!(categories.contains(&EntityCategory::Author));
        assert!(categories.contains(&EntityCategory::Organization));
    }

    #[test]
    fn test_all_pairs_author_links() {
        let kg = KnowledgeGraph::build(
            &buckets(
                &["Jane Doe", "John Smith"],
                &["Acme Corp", "MIT"],
                &["[12]", "[13]", "[14]"],
            ),
            &style(),
        );

        assert_eq!(kg.node_count(), 7);
        // 2 authors x (2 orgs + 3 citations)
        assert_eq!(kg.edge_count(), 10);
    }

    #[test]
    fn test_edges_always_touch_an_author() {
        let kg = KnowledgeGraph::build(
            &buckets(&["Jane Doe"], &["Acme Corp"], &["[1]"]),
            &style(),
        );

        for (a, b) in kg.edges() {
            assert!(
                a.category == EntityCategory::Author || b.category == EntityCategory::Author,
                "edge {} -- {} does not touch an author",
                a.name,
                b.name
            );
        }
    }

    #[test]
    fn test_no_authors_means_no_edges() {
        let kg = KnowledgeGraph::build(
            &buckets(&[], &["Acme Corp", "MIT"], &["[1]"]),
            &style(),
        );

        assert_eq!(kg.node_count(), 3);
        assert_eq!(kg.edge_count(), 0);
    }

    #[test]
    fn test_empty_buckets_build_empty_graph() {
        let kg = KnowledgeGraph::build(&EntityBuckets::new(), &style());
        assert_eq!(kg.node_count(), 0);
        assert_eq!(kg.edge_count(), 0);
    }

    #[test]
    fn test_node_colors_follow_style() {
        let kg = KnowledgeGraph::build(
            &buckets(&["Jane Doe"], &["Acme Corp"], &["[1]"]),
            &style(),
        );

        for node in kg.nodes() {
            let expected = match node.category {
                EntityCategory::Author => "blue",
                EntityCategory::Organization => "red",
                EntityCategory::Citation => "green",
            };
            assert_eq!(node.color, expected);
        }
    }

    #[test]
    fn test_duplicate_text_across_buckets_shares_one_node() {
        // Same string detected as both person and org: one node, later
        // category wins, and the author-side link becomes a self-loop.
        let kg = KnowledgeGraph::build(&buckets(&["Acme"], &["Acme"], &[]), &style());

        assert_eq!(kg.node_count(), 1);
        let node = kg.nodes().next().unwrap();
        assert_eq!(node.category, EntityCategory::Organization);

        assert_eq!(kg.edge_count(), 1);
        let (a, b) = kg.edges().next().unwrap();
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn test_vis_data_shape() {
        let kg = KnowledgeGraph::build(&buckets(&["Jane Doe"], &["Acme Corp"], &[]), &style());
        let data = kg.to_vis_data();

        assert_eq!(data.nodes.len(), 2);
        assert_eq!(data.edges.len(), 1);
        assert!(data.nodes.iter().any(|n| n.label == "Jane Doe"));
    }

    proptest! {
        /// For arbitrary disjoint entity sets the edge count is exactly
        /// |authors| * (|orgs| + |citations|) and every edge touches an
        /// author.
        #[test]
        fn prop_edge_structure(
            authors in proptest::collection::btree_set("a[a-z]{1,6}", 0..6),
            orgs in proptest::collection::btree_set("o[a-z]{1,6}", 0..6),
            citations in proptest::collection::btree_set("c[a-z]{1,6}", 0..6),
        ) {
            let mut b = EntityBuckets::new();
            b.authors = authors.clone();
            b.organizations = orgs.clone();
            b.citations = citations.clone();

            let kg = KnowledgeGraph::build(&b, &GraphStyleConfig::default());

            prop_assert_eq!(
                kg.node_count(),
                authors.len() + orgs.len() + citations.len()
            );
            prop_assert_eq!(
                kg.edge_count(),
                authors.len() * (orgs.len() + citations.len())
            );

            for (x, y) in kg.edges() {
                prop_assert!(
                    x.category == EntityCategory::Author
                        || y.category == EntityCategory::Author
                );
                prop_assert!(!(
                    x.category == EntityCategory::Author
                        && y.category == EntityCategory::Author
                ));
            }
        }
    }
}
