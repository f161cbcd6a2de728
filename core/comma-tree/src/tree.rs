use comma_protocol::{NodeId, ParseTreeRecord, Span};
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use crate::error::TreeError;

/// A constituent of the parse tree: a phrase or a preterminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    pub id: NodeId,
    pub label: String,
    pub span: Span,
}

/// Constituency tree indexed for constant-time parent and sibling lookups.
///
/// Node ids are the positions of the nodes in the source record, and match
/// the `petgraph` node indices one to one.
#[derive(Debug, Clone)]
pub struct ParseTree {
    graph: DiGraph<ParseNode, ()>,
    root: NodeId,
    parents: Vec<Option<NodeId>>,
    children: Vec<Vec<NodeId>>,
    /// Position of each node among its parent's children.
    slots: Vec<usize>,
}

impl ParseTree {
    /// Validate a flat tree record and build the index.
    pub fn from_record(record: &ParseTreeRecord) -> Result<Self, TreeError> {
        let len = record.nodes.len();
        if len == 0 {
            return Err(TreeError::Empty);
        }
        if record.root.index() >= len {
            return Err(TreeError::RootOutOfRange { root: record.root.0, len });
        }

        // 1. Nodes, in record order so that NodeId == NodeIndex
        let mut graph = DiGraph::with_capacity(len, len.saturating_sub(1));
        for (i, node) in record.nodes.iter().enumerate() {
            graph.add_node(ParseNode {
                id: NodeId::new(i as u32),
                label: node.label.clone(),
                span: node.span,
            });
        }

        // 2. Parent -> child edges, one parent per node
        let mut parents: Vec<Option<NodeId>> = vec![None; len];
        let mut slots = vec![0; len];
        for (i, node) in record.nodes.iter().enumerate() {
            let parent = NodeId::new(i as u32);
            for (slot, &child) in node.children.iter().enumerate() {
                if child.index() >= len {
                    return Err(TreeError::DanglingChild { parent: parent.0, child: child.0 });
                }
                if child == record.root {
                    return Err(TreeError::RootHasParent(child.0));
                }
                if parents[child.index()].replace(parent).is_some() {
                    return Err(TreeError::MultipleParents { child: child.0 });
                }
                slots[child.index()] = slot;
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(child.index()), ());
            }
        }

        if is_cyclic_directed(&graph) {
            return Err(TreeError::Cycle);
        }

        // 3. Everything must hang off the root
        let mut reached = vec![false; len];
        let mut dfs = Dfs::new(&graph, NodeIndex::new(record.root.index()));
        while let Some(idx) = dfs.next(&graph) {
            reached[idx.index()] = true;
        }
        if let Some(detached) = reached.iter().position(|r| !r) {
            return Err(TreeError::Detached(detached as u32));
        }

        // 4. Children nested in their parent and ordered by span
        let children: Vec<Vec<NodeId>> = record.nodes.iter().map(|n| n.children.clone()).collect();
        for (i, kids) in children.iter().enumerate() {
            let parent_span = record.nodes[i].span;
            let mut previous_end = parent_span.start;
            for child in kids {
                let span = record.nodes[child.index()].span;
                if !parent_span.contains(&span) {
                    return Err(TreeError::ChildOutsideParent { parent: i as u32, child: child.0 });
                }
                if span.start < previous_end {
                    return Err(TreeError::SiblingsOutOfOrder { parent: i as u32 });
                }
                previous_end = span.end;
            }
        }

        log::trace!("indexed parse tree with {} nodes rooted at {}", len, record.root.0);

        Ok(Self { graph, root: record.root, parents, children, slots })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &ParseNode {
        &self.graph[NodeIndex::new(id.index())]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.index()]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.index()]
    }

    /// The ordered children of `id`'s parent (including `id`), or `None` for the root.
    pub fn siblings(&self, id: NodeId) -> Option<&[NodeId]> {
        self.parent(id).map(|p| self.children(p))
    }

    pub fn left_sibling(&self, id: NodeId) -> Option<NodeId> {
        let slot = self.slots[id.index()];
        if slot == 0 {
            return None;
        }
        self.siblings(id).map(|s| s[slot - 1])
    }

    pub fn right_sibling(&self, id: NodeId) -> Option<NodeId> {
        let slot = self.slots[id.index()];
        self.siblings(id).and_then(|s| s.get(slot + 1).copied())
    }

    /// The deepest node whose span is exactly `span`.
    ///
    /// Descends from the root through the single child containing `span`,
    /// so a unary chain over one token resolves to its preterminal.
    pub fn find_exact(&self, span: Span) -> Option<NodeId> {
        let mut current = self.root;
        if !self.node(current).span.contains(&span) {
            return None;
        }

        let mut found = None;
        loop {
            if self.node(current).span == span {
                found = Some(current);
            }
            match self
                .children(current)
                .iter()
                .find(|&&c| self.node(c).span.contains(&span))
            {
                Some(&next) => current = next,
                None => break,
            }
        }
        found
    }
}
