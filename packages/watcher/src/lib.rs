//! NHS Jobs watcher: scrapes the public search results for postings matching
//! a watch list and relays new matches to Telegram.
//!
//! The whole program is one sequential pipeline, repeated on a fixed
//! interval by the `watcher` binary:
//!
//! ```text
//! fan-out (keyword × location)
//!     └─► pagination walker (per query, date cutoff)
//!             └─► fetcher + parser (per page)
//!     └─► cross-query dedupe
//! matcher (title/employer substrings)
//! notifier (seen-link gate → Telegram)
//! ```

pub mod config;
pub mod fanout;
pub mod fetcher;
pub mod matcher;
pub mod notifier;
pub mod parser;
pub mod pipeline;
pub mod types;
pub mod walker;
