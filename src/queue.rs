use crate::error::{Error, Result};
use crate::stack::Stack;

/// A first-in first-out queue built from two stacks.
///
/// [`enqueue`] pushes onto the inbox stack. [`dequeue`] pops from the
/// outbox stack, refilling it by draining the inbox *only when the outbox
/// is empty*. Draining into a non-empty outbox would bury older elements
/// under newer ones and reorder interleaved traffic; the emptiness guard
/// is what makes the amortized cost O(1) and the order correct.
///
/// [`enqueue`]: TwoStackQueue::enqueue
/// [`dequeue`]: TwoStackQueue::dequeue
///
/// # Examples
///
/// ```
/// use sentinel_list::TwoStackQueue;
///
/// let mut queue = TwoStackQueue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.dequeue(), Ok(1));
///
/// queue.enqueue(3);
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert_eq!(queue.dequeue(), Ok(3));
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TwoStackQueue<T> {
    inbox: Stack<T>,
    outbox: Stack<T>,
}

impl<T> TwoStackQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            inbox: Stack::new(),
            outbox: Stack::new(),
        }
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    /// Adds an element to the back of the queue, in *O*(1) time.
    pub fn enqueue(&mut self, element: T) {
        self.inbox.push(element);
    }

    /// Removes and returns the front element, or [`Error::Underflow`] if
    /// the queue is empty. Amortized *O*(1): each element is moved from
    /// inbox to outbox at most once.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.outbox.is_empty() {
            while let Ok(element) = self.inbox.pop() {
                self.outbox.push(element);
            }
        }
        self.outbox.pop().map_err(|_| Error::Underflow("dequeue"))
    }
}

#[cfg(test)]
mod tests {
    use super::TwoStackQueue;
    use crate::error::Error;

    #[test]
    fn queue_fifo_order() {
        let mut queue = TwoStackQueue::new();
        for i in 0..5 {
            queue.enqueue(i);
        }
        assert_eq!(queue.len(), 5);
        for i in 0..5 {
            assert_eq!(queue.dequeue(), Ok(i));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_underflow() {
        let mut queue = TwoStackQueue::<i32>::new();
        assert_eq!(queue.dequeue(), Err(Error::Underflow("dequeue")));

        queue.enqueue(1);
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Err(Error::Underflow("dequeue")));
    }

    #[test]
    fn queue_preserves_order_across_interleaving() {
        // the outbox must not be refilled while it still holds elements
        let mut queue = TwoStackQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Ok(1)); // drains [1, 2], pops 1
        queue.enqueue(3);
        queue.enqueue(4);
        assert_eq!(queue.dequeue(), Ok(2)); // outbox non-empty, no drain
        assert_eq!(queue.dequeue(), Ok(3));
        queue.enqueue(5);
        assert_eq!(queue.dequeue(), Ok(4));
        assert_eq!(queue.dequeue(), Ok(5));
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_len_counts_both_stacks() {
        let mut queue = TwoStackQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.dequeue().unwrap();
        queue.enqueue(3);
        // one element in the outbox, one in the inbox
        assert_eq!(queue.len(), 2);
    }
}
