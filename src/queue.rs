//! A priority queue backed by a singly linked chain of owned nodes.
//!
//! Insertion is a linear scan from the front comparing priorities, giving
//! O(n) insertion and O(1) removal. This is acceptable for grid search
//! workloads where the queue length is bounded by the size of the frontier.

use num_traits::Zero;

use crate::error::EmptyQueueError;

struct QueueNode<T, P> {
    element: T,
    priority: P,
    next: Option<Box<QueueNode<T, P>>>,
}

/// An ordered sequence of elements with numeric priorities. Entries inserted
/// with [enqueue_with_priority](Self::enqueue_with_priority) are kept in
/// non-decreasing priority order from front to rear; the front is always the
/// next element to be dequeued.
pub struct LinkedPriorityQueue<T, P> {
    front: Option<Box<QueueNode<T, P>>>,
    len: usize,
}

impl<T, P> LinkedPriorityQueue<T, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        LinkedPriorityQueue { front: None, len: 0 }
    }

    /// Appends an element at the rear unconditionally, with priority zero.
    ///
    /// This is meant for seeding an empty queue with the first element of a
    /// search. Appending to a non-empty queue bypasses the priority ordering
    /// and can leave the queue unordered.
    pub fn enqueue(&mut self, element: T)
    where
        P: Zero,
    {
        let mut link = &mut self.front;
        while link.is_some() {
            link = &mut link.as_mut().unwrap().next;
        }
        *link = Some(Box::new(QueueNode {
            element,
            priority: P::zero(),
            next: None,
        }));
        self.len += 1;
    }

    /// Inserts an element immediately before the first entry whose priority
    /// is greater than or equal to the given priority. Among entries sharing
    /// a priority value the most recently inserted is dequeued first, while
    /// entries of strictly lower priority keep their precedence. Any priority
    /// value is accepted, including negative and duplicate ones.
    pub fn enqueue_with_priority(&mut self, element: T, priority: P)
    where
        P: PartialOrd,
    {
        let mut link = &mut self.front;
        while link.as_ref().map_or(false, |node| node.priority < priority) {
            link = &mut link.as_mut().unwrap().next;
        }
        let next = link.take();
        *link = Some(Box::new(QueueNode {
            element,
            priority,
            next,
        }));
        self.len += 1;
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Result<T, EmptyQueueError> {
        match self.front.take() {
            Some(node) => {
                self.front = node.next;
                self.len -= 1;
                Ok(node.element)
            }
            None => Err(EmptyQueueError),
        }
    }

    /// Returns a reference to the front element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyQueueError> {
        self.front
            .as_ref()
            .map(|node| &node.element)
            .ok_or(EmptyQueueError)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl<T, P> Default for LinkedPriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Drop for LinkedPriorityQueue<T, P> {
    // Unlinks nodes iteratively; the derived recursive drop would overflow
    // the stack on long chains.
    fn drop(&mut self) {
        let mut current = self.front.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}
