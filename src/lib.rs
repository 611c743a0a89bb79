//! This crate implements a playlist as an unbalanced Binary Search Tree
//! (BST), mostly for educational purposes.
//!
//! ## The key rule
//!
//! Every song in the playlist is a `(title, artist)` pair. The tree is
//! not ordered by title alone or by artist alone - each node's sort key
//! is the *concatenation* of its title and artist, compared byte-wise.
//! Note that this is a single-string comparison, not a field-by-field
//! one: `("ab", "c")` and `("a", "bc")` produce the same key.
//!
//! ## The invariants
//!
//! 1. For every node in the tree, all the nodes in its left subtree have
//!    a key strictly less than its own key.
//! 2. For every node in the tree, all the nodes in its right subtree have
//!    a key greater than *or equal to* its own key.
//!
//! The "or equal to" in the second invariant is how duplicates are
//! handled: the same song may be inserted any number of times, and every
//! extra copy lands in the right subtree of an existing one. There is no
//! uniqueness enforcement and no per-key value to overwrite.
//!
//! Because there is no rebalancing, the height of the tree - and with it
//! the cost of every operation - is at the mercy of the insertion order.
//! Inserting songs in sorted order produces a linked list in disguise.
//! That trade-off is deliberate: the point here is the unadorned BST
//! algorithms, not production-grade guarantees.
//!
//! # Examples
//!
//! ```
//! use playlist::Playlist;
//!
//! let mut playlist = Playlist::new();
//!
//! assert!(playlist.insert("Humble", "Kendrick Lamar"));
//! assert!(playlist.insert("Espresso", "Sabrina Carpenter"));
//!
//! // Duplicates are allowed.
//! assert!(playlist.insert("Nights", "Frank Ocean"));
//! assert!(playlist.insert("Nights", "Frank Ocean"));
//! assert_eq!(playlist.len(), 4);
//!
//! // A blank title or artist is the one rejected input.
//! assert!(!playlist.insert("", "Frank Ocean"));
//! assert_eq!(playlist.len(), 4);
//!
//! assert!(playlist.contains("Humble", "Kendrick Lamar"));
//! assert!(playlist.remove("Humble", "Kendrick Lamar"));
//! assert!(!playlist.contains("Humble", "Kendrick Lamar"));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;

pub use tree::{Playlist, Song};
