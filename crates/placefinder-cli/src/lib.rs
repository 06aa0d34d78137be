//! placefinder-cli
//! ================
//!
//! Command-line front end for `placefinder-core`.
//!
//! This crate primarily provides a binary (`placefinder`). The library target
//! only exists so that docs render this overview.
//!
//! Basic usage:
//!
//! ```text
//! placefinder cities be
//! placefinder areas bengaluru k
//! placefinder search --city Bengaluru --area Koramangala --type restaurant
//! PLACEFINDER_API_URL=http://localhost:8002 placefinder health
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
