//! Serialization of decode requests per render target.
//!
//! A render target must not have more than one decode request
//! in flight at a time.
//! [`RequestQueue`] keeps the requests of each target in FIFO order:
//! a request submitted while another one for the same target is outstanding
//! waits until that one completes or fails.
//! Superseded requests are not cancelled,
//! the caller discards their results.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use tracing::trace;

#[derive(Debug)]
struct TargetQueue<T> {
    waiting: VecDeque<T>,
}

/// Per-target FIFO queues of decode requests.
///
/// `K` identifies a render target and `T` is a request.
/// Each method returns the request the caller must start now, if any.
#[derive(Debug)]
pub struct RequestQueue<T, K = ()> {
    targets: HashMap<K, TargetQueue<T>>,
}

impl<T, K> Default for RequestQueue<T, K> {
    fn default() -> Self {
        RequestQueue {
            targets: HashMap::new(),
        }
    }
}

impl<T, K> RequestQueue<T, K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a request for a target.
    ///
    /// Returns the request back if the target was idle,
    /// in which case the caller starts it right away.
    /// Otherwise the request waits for the outstanding one.
    pub fn submit(&mut self, target: K, request: T) -> Option<T> {
        match self.targets.get_mut(&target) {
            Some(queue) => {
                queue.waiting.push_back(request);
                trace!("Request queued, {} waiting", queue.waiting.len());
                None
            }
            None => {
                self.targets.insert(
                    target,
                    TargetQueue {
                        waiting: VecDeque::new(),
                    },
                );
                Some(request)
            }
        }
    }

    /// Report that the outstanding request of a target completed.
    ///
    /// Returns the next request to start for that target, if any.
    pub fn complete(&mut self, target: &K) -> Option<T> {
        let queue = self.targets.get_mut(target)?;
        match queue.waiting.pop_front() {
            Some(next) => Some(next),
            None => {
                self.targets.remove(target);
                None
            }
        }
    }

    /// Report that the outstanding request of a target failed.
    ///
    /// Failures do not block the queue:
    /// the next request is started as on completion.
    pub fn fail(&mut self, target: &K) -> Option<T> {
        trace!("Request failed, moving on");
        self.complete(target)
    }

    /// Whether a target has a request outstanding.
    pub fn is_busy(&self, target: &K) -> bool {
        self.targets.contains_key(target)
    }

    /// The number of requests waiting for a target,
    /// not counting the outstanding one.
    pub fn waiting(&self, target: &K) -> usize {
        self.targets.get(target).map_or(0, |q| q.waiting.len())
    }
}

impl<T> RequestQueue<T, ()> {
    /// Submit a request to a queue with a single target.
    pub fn submit_one(&mut self, request: T) -> Option<T> {
        self.submit((), request)
    }

    /// Report completion to a queue with a single target.
    pub fn complete_one(&mut self) -> Option<T> {
        self.complete(&())
    }

    /// Report failure to a queue with a single target.
    pub fn fail_one(&mut self) -> Option<T> {
        self.fail(&())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_outstanding_request_per_target() {
        let mut queue = RequestQueue::new();
        assert_eq!(queue.submit("axial", 0), Some(0));
        assert_eq!(queue.submit("axial", 1), None);
        assert_eq!(queue.submit("axial", 2), None);
        // other targets are independent
        assert_eq!(queue.submit("coronal", 10), Some(10));

        assert!(queue.is_busy(&"axial"));
        assert_eq!(queue.waiting(&"axial"), 2);

        assert_eq!(queue.complete(&"axial"), Some(1));
        assert_eq!(queue.fail(&"axial"), Some(2));
        assert_eq!(queue.complete(&"axial"), None);
        assert!(!queue.is_busy(&"axial"));

        assert_eq!(queue.complete(&"coronal"), None);
        assert_eq!(queue.complete(&"coronal"), None);
    }

    #[test]
    fn single_target() {
        let mut queue: RequestQueue<u32> = RequestQueue::new();
        assert_eq!(queue.submit_one(5), Some(5));
        assert_eq!(queue.submit_one(6), None);
        assert_eq!(queue.fail_one(), Some(6));
        assert_eq!(queue.complete_one(), None);
        assert_eq!(queue.submit_one(7), Some(7));
    }
}
