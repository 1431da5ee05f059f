//! # Linear Collections
//!
//! Two ordered, index-addressable containers with the same positional contract and
//! different storage strategies:
//!
//! - **[`ArrayList<T>`]** – one contiguous buffer that doubles when full; O(1) indexed
//!   access, amortized O(1) append, O(n) insertion and removal in the middle
//! - **[`LinkedList<T>`]** – singly-linked nodes with a tail reference; O(1) append,
//!   O(index) positional access, O(1) unlink once the predecessor is known
//! - **[`Sequence<T>`]** – trait over the shared contract (`get`, `set`, `add`,
//!   `insert`, `remove_at`, `index_of`, `contains`, `remove`, `clear`), also
//!   implemented for `Vec`
//!
//! ## Errors
//!
//! Every positional operation validates its index before touching the container and
//! reports an out-of-range argument as [`IndexError`]. Searches never fail: a missing
//! element is reported as `None`.
//!
//! ## Absent elements
//!
//! Search compares with `PartialEq`, so containers of `Option<U>` can hold and look up
//! absent values; two `None`s compare equal.
//!
//! ## Quick Examples
//!
//! ### Using ArrayList
//!
//! ```rust
//! use linear_collections::ArrayList;
//!
//! let mut shopping = ArrayList::new();
//! for item in ["Milk", "Honey", "Olives", "Water", "Beer"] {
//!     shopping.add(item);
//! }
//! assert_eq!(shopping.remove(&"Olives"), Some(2));
//! shopping.insert(1, "Fruits").unwrap();
//!
//! let items: Vec<_> = shopping.iter().copied().collect();
//! assert_eq!(items, ["Milk", "Fruits", "Honey", "Water", "Beer"]);
//! assert_eq!(shopping.index_of(&"Beer"), Some(4));
//! ```
//!
//! ### Using LinkedList
//!
//! ```rust
//! use linear_collections::{IndexError, LinkedList};
//!
//! let mut shopping: LinkedList<&str> = ["Honey", "Olives", "Water"].into_iter().collect();
//! shopping[2] = "A lot of Water";
//! assert_eq!(shopping.remove_at(0), Ok("Honey"));
//! assert_eq!(shopping.remove_at(5), Err(IndexError { index: 5, len: 2 }));
//! assert!(shopping.contains(&"A lot of Water"));
//! ```
//!
//! ### Using Sequence
//!
//! ```rust
//! use linear_collections::{ArrayList, LinkedList, Sequence};
//!
//! fn restock<S: Sequence<u32>>(seq: &mut S) {
//!     seq.add(1);
//!     seq.add(3);
//!     seq.insert(1, 2).unwrap();
//! }
//!
//! let mut array = ArrayList::new();
//! let mut linked = LinkedList::new();
//! restock(&mut array);
//! restock(&mut linked);
//! assert!(array.iter().eq(linked.iter()));
//! ```
//!
//! [`ArrayList<T>`]: generic::array_list::ArrayList
//! [`LinkedList<T>`]: generic::linked_list::LinkedList
//! [`Sequence<T>`]: generic::sequence::Sequence

pub mod error;
pub mod generic;

pub use error::IndexError;
pub use generic::array_list::{ArrayList, DEFAULT_CAPACITY};
pub use generic::linked_list::LinkedList;
pub use generic::sequence::Sequence;
