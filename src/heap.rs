/*!
# Indexed Min-Heap

A binary min-heap over [`HeapNode`]s with a fixed capacity and an auxiliary
element-to-position index. The index makes it possible to change the key of a
node that is already enqueued and restore the heap property in `O(log n)`
without a linear scan, which is what the shortest-path engine relies on for
its decrease-key step.

The heap is laid out as a 0-indexed array where the children of position `i`
live at `2i + 1` and `2i + 2`. Every swap keeps the position index in sync.
*/

use std::hash::Hash;

use fxhash::FxHashMap;

use crate::Cost;

/// A pair of an element and the numeric key it is ordered by.
///
/// The key is mutable so that callers can adjust it in place through
/// [`IndexedMinHeap::node_mut`]; the heap itself is re-balanced afterwards via
/// [`IndexedMinHeap::update`].
#[derive(Debug, Clone)]
pub struct HeapNode<E> {
    element: E,
    key: Cost,
}

impl<E> HeapNode<E> {
    /// Creates a node holding `element` ordered by `key`.
    pub fn new(element: E, key: Cost) -> Self {
        HeapNode { element, key }
    }

    /// The key this node is ordered by.
    pub fn key(&self) -> Cost {
        self.key
    }

    /// Overwrites the key. The owning heap must be told via
    /// [`IndexedMinHeap::update`] afterwards.
    pub fn set_key(&mut self, key: Cost) {
        self.key = key;
    }

    /// The element held by this node.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Consumes the node and returns its element.
    pub fn into_element(self) -> E {
        self.element
    }
}

/// Fixed-capacity binary min-heap with an element-to-position index.
///
/// Inserting beyond the declared capacity is a silent no-op reported through
/// the `bool` return of [`IndexedMinHeap::insert`], not an error. This
/// mirrors the bounded-buffer use of the heap inside shortest-path searches
/// where the capacity is sized to the vertex count up front.
pub struct IndexedMinHeap<E> {
    nodes: Vec<HeapNode<E>>,
    positions: FxHashMap<E, usize>,
    capacity: usize,
}

impl<E> IndexedMinHeap<E>
where
    E: Eq + Hash + Clone,
{
    /// Creates an empty heap accepting at most `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            nodes: Vec::with_capacity(capacity),
            positions: FxHashMap::default(),
            capacity,
        }
    }

    /// Returns the number of nodes currently enqueued.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns *true* if no node is enqueued.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the maximum number of nodes this heap accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns *true* if a node holding `element` is enqueued.
    pub fn contains(&self, element: &E) -> bool {
        self.positions.contains_key(element)
    }

    /// Inserts a node and restores the heap property by sifting it up.
    ///
    /// Returns *false* (and drops the node) if the heap is at capacity.
    pub fn insert(&mut self, node: HeapNode<E>) -> bool {
        if self.nodes.len() >= self.capacity {
            return false;
        }

        let pos = self.nodes.len();
        self.positions.insert(node.element.clone(), pos);
        self.nodes.push(node);
        self.sift_up(pos);
        true
    }

    /// Returns a reference to the minimum node without removing it.
    pub fn peek(&self) -> Option<&HeapNode<E>> {
        self.nodes.first()
    }

    /// Removes and returns the minimum node, or `None` if the heap is empty.
    ///
    /// The last node replaces the root and is sifted down to restore order.
    pub fn pop(&mut self) -> Option<HeapNode<E>> {
        if self.nodes.is_empty() {
            return None;
        }

        let popped = self.nodes.swap_remove(0);
        self.positions.remove(&popped.element);
        if let Some(root) = self.nodes.first() {
            self.positions.insert(root.element.clone(), 0);
            self.sift_down(0);
        }

        Some(popped)
    }

    /// Returns the node holding `element`, if enqueued.
    pub fn node(&self, element: &E) -> Option<&HeapNode<E>> {
        self.positions.get(element).map(|&pos| &self.nodes[pos])
    }

    /// Returns mutable access to the node holding `element`, if enqueued.
    ///
    /// After changing the key through this handle, call
    /// [`IndexedMinHeap::update`] to re-establish the heap property.
    pub fn node_mut(&mut self, element: &E) -> Option<&mut HeapNode<E>> {
        match self.positions.get(element) {
            Some(&pos) => Some(&mut self.nodes[pos]),
            None => None,
        }
    }

    /// Re-balances the heap after the key of `element`'s node was changed in
    /// place. A single key change can only violate the heap invariant in one
    /// direction, so exactly one of sift-down or sift-up runs.
    ///
    /// ** Panics if no node holding `element` is enqueued **
    pub fn update(&mut self, element: &E) {
        let pos = self.positions[element];
        if !self.sift_down(pos) {
            self.sift_up(pos);
        }
    }

    fn swap_nodes(&mut self, fst: usize, snd: usize) {
        self.nodes.swap(fst, snd);
        self.positions.insert(self.nodes[fst].element.clone(), fst);
        self.positions.insert(self.nodes[snd].element.clone(), snd);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.nodes[pos].key < self.nodes[parent].key {
                self.swap_nodes(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Returns *true* if the node was actually pushed downward.
    fn sift_down(&mut self, mut pos: usize) -> bool {
        let mut pushed = false;
        loop {
            let left = 2 * pos + 1;
            if left >= self.nodes.len() {
                break;
            }

            // on equal minimal keys the left child wins
            let right = left + 1;
            let child = if right < self.nodes.len() && self.nodes[right].key < self.nodes[left].key
            {
                right
            } else {
                left
            };

            if self.nodes[child].key < self.nodes[pos].key {
                self.swap_nodes(pos, child);
                pos = child;
                pushed = true;
            } else {
                break;
            }
        }
        pushed
    }
}
