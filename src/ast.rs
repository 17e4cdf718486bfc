//! # Expression Language - Abstract Syntax Tree
//!
//! Expressions navigate and aggregate over a parsed JSON document. There are
//! three kinds of node, all in [`expressions`]:
//!
//! - **Literal** - an unsigned integer such as `10`
//! - **Path** - dotted keys and bracketed subscripts such as `a.b[1].c`
//! - **FunctionCall** - one of the intrinsics `min`, `max` or `size`
//!
//! ## Dynamic Subscripts
//!
//! The content of `[...]` is a full expression evaluated against the whole
//! document, not the value reached so far:
//!
//! ```text
//! a.b[a.b[1]].c
//! ```
//!
//! Given `{"a": {"b": [1, 2, {"c": "test"}]}}`, the inner `a.b[1]` yields `2`,
//! so the outer path resolves `a.b[2].c` to `"test"`.
//!
//! ## Intrinsics
//!
//! ```text
//! max(a.b[0], 10, a.b[1])   // numbers and numeric arrays
//! min(a.b[3])               // smallest element of an array
//! size(a)                   // members, elements or characters
//! ```

pub mod expressions;

pub use expressions::{Expr, PathSegment};
