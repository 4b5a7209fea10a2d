//! Wire types shared by the catalog frontend.
//!
//! Everything here is plain data plus pure helpers, so it builds and tests on
//! the host without a browser.

pub mod domain;
