//! # Chapter 0: Getting Started
//!
//! Your first sieve chain in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Create a [`Request`](crate::Request) and a [`Response`](crate::Response)
//! - Register filters on a [`FilterChain`](crate::FilterChain)
//! - Run one pass and read both results
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sieve = "0.1"
//! ```
//!
//! ## Your First Chain
//!
//! ```
//! use sieve::prelude::*;
//!
//! let mut chain = FilterChain::new();
//! chain
//!     .add_filter(HtmlFilter::new())
//!     .add_filter(SensitiveFilter::new())
//!     .add_filter(FaceFilter::new());
//!
//! let mut request = Request::new(":):,<script>");
//! let mut response = Response::new("response:");
//! chain.run(&mut request, &mut response)?;
//!
//! println!("{request}");
//! println!("{response}");
//! # Ok::<(), sieve::Error>(())
//! ```
//!
//! ## What Happens
//!
//! Each filter wraps the rest of the chain:
//!
//! ```text
//! run ─▶ HTMLFilter ─▶ sensitiveFilter ─▶ FaceFilter ─▶ (exhausted)
//!            │               │                │
//!   request: rewritten in registration order ─┘
//!            │               │                │
//!  response: ◀── HTMLFilter ◀── sensitiveFilter ◀── FaceFilter
//! ```
//!
//! The request is rewritten top-down; the response is annotated bottom-up:
//!
//! ```text
//! ^V^,[script]----HTMLFilter() ---sensitiveFilter()----FaceFilter()
//! response:---FaceFilter()---sensitiveFilter()---HTMLFilter()
//! ```
//!
//! ## Running Twice
//!
//! A chain remembers how far it got. Once exhausted, running it again is a
//! no-op until you call [`FilterChain::reset`](crate::FilterChain::reset).
//!
//! ## Next Steps
//!
//! Continue to [Chapter 1: Writing Filters][super::chapter_1].
