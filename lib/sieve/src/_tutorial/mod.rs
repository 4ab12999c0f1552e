//! # Tutorial: Building filter chains with sieve
//!
//! Learn to build request/response filter chains step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first chain
//! 2. [Writing Filters][chapter_1] - Before/after hooks, short-circuits, errors
//! 3. [Configuration & Observability][chapter_2] - JSON chains, logging, metrics
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
