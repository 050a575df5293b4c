use crate::WorldState;

/// Index of a node within the pass-scoped pool.
///
/// Parent links are stored as indices, never as references, so the whole
/// search graph can be reclaimed with one [`NodePool::reset`] and a stale id
/// can never dangle into freed memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// One explored state in the search graph.
#[derive(Debug, Clone)]
pub struct PlannerNode<S> {
    /// Hypothetical situation this node represents.
    pub state: WorldState,
    /// Accumulated cost from the root, in milliseconds. Monotonically
    /// non-decreasing along any root-to-node path.
    pub cost_millis: u32,
    /// Number of action steps from the root.
    pub depth: u32,
    pub parent: Option<NodeId>,
    /// Record spec for the transition from the parent. `None` only for the
    /// root.
    pub spec: Option<S>,
}

/// Fixed-capacity, pass-scoped storage for search nodes.
///
/// Acquisition is O(1); the whole pass is reclaimed en masse by `reset`.
/// Exhaustion is a recoverable condition: `acquire` returns `None` and the
/// caller aborts the pass. Ids are valid only until the next `reset`.
#[derive(Debug)]
pub struct NodePool<S> {
    nodes: Vec<PlannerNode<S>>,
    capacity: usize,
}

impl<S> NodePool<S> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reclaim every node of the finished pass. The backing storage is kept,
    /// so steady-state planning does not touch the allocator.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    pub fn acquire(&mut self, node: PlannerNode<S>) -> Option<NodeId> {
        if self.nodes.len() >= self.capacity {
            return None;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        Some(id)
    }

    pub fn get(&self, id: NodeId) -> &PlannerNode<S> {
        &self.nodes[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &PlannerNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index as u32), node))
    }
}
