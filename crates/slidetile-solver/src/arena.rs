//! Index-linked storage for the nodes of one search.

use slidetile_core::{Board, Slide};

use crate::Step;

/// Index of a node in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A search node: a board plus its bookkeeping.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) board: Board,
    pub(crate) g: u32,
    pub(crate) h: u32,
    /// The node this one was generated from, and the slide that did it.
    pub(crate) parent: Option<(NodeId, Slide)>,
}

/// Owns every node created by one search.
///
/// Parents are referenced by index, so the nodes form a tree without shared
/// ownership and the whole arena is released with a single drop.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walks parent links from `id` back to the root and returns the steps in
    /// root-to-`id` order.
    ///
    /// Boards are cloned out so the arena can be dropped afterwards.
    pub(crate) fn path_to(&self, id: NodeId) -> Vec<Step> {
        let mut steps = Vec::with_capacity(self.get(id).g as usize);
        let mut current = id;
        while let Some((parent, slide)) = self.get(current).parent {
            steps.push(Step::new(slide, self.get(current).board.clone()));
            current = parent;
        }
        steps.reverse();
        steps
    }
}
