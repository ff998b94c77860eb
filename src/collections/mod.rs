//! Ordered containers used to drive graph searches.
//!
//! - `stack`: last-in-first-out
//! - `queue`: first-in-first-out
//! - `priority_queue`: minimum-priority-first binary heap
//!
//! None of these know anything about graphs.

pub mod priority_queue;
pub mod queue;
pub mod stack;

pub use priority_queue::MinPriorityQueue;
pub use queue::Queue;
pub use stack::Stack;
