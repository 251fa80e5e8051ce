//! Trick state and follow rules.
//!
//! ```
//! use rust_tichu::cards::CardSet;
//! use rust_tichu::stack::Trick;
//!
//! let mut trick = Trick::new();
//! assert!(trick.add(&CardSet::parse("S9 H9").unwrap()));
//! assert!(!trick.add(&CardSet::parse("S8 H8").unwrap()));
//! assert!(trick.add(&CardSet::parse("S2 H2 D2 C2").unwrap()));
//! ```

mod trick;

pub use trick::Trick;
