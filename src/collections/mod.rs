//! Supporting collections: indexed priority queue and union-find

pub mod index_pq;
pub mod union_find;

pub use index_pq::IndexedPriorityQueue;
pub use union_find::UnionFind;
