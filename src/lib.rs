//! Closures and higher-order functions.
//!
//! - [adder]: a factory returning a closure which captures an offset.
//! - [incrementer]: a factory returning two closures sharing one counter.
//! - [mapstr]: mapping a string function over a sequence of strings.
//! - [callbacks]: functions which yield their results to a callback.

pub mod adder;
pub mod callbacks;
pub mod config;
pub mod error;
pub mod incrementer;
pub mod mapstr;

pub use adder::{make_adder, make_adder_boxed};
pub use config::DemoConfig;
pub use error::{Error, Result};
pub use incrementer::{make_incrementer, make_shared_incrementer, Incrementer};
pub use mapstr::{mapstr, title, try_mapstr};
