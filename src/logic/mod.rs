//! # Layer 2: Composite Needs
//!
//! Boolean composition of needs. Composites own their children, never
//! evaluate at construction, and are needs themselves, so trees nest freely.
//!
//! ```text
//! logic/
//! ├── negate.rs - NotNeed
//! ├── binary.rs - AndNeed, OrNeed, XorNeed
//! ├── group.rs  - AllNeed, AnyNeed (n-ary, boxed children)
//! └── ops.rs    - `!`, `&`, `|`, `^` operators
//! ```
//!
//! | Composite | Met when            | Short-circuit        | Error on failure                   |
//! |-----------|---------------------|----------------------|------------------------------------|
//! | `!a`      | `a` unmet           | -                    | own fallback (default: `a.error()`) |
//! | `a & b`   | both met            | `b` skipped if `a` unmet | first unmet of `a`, `b`        |
//! | `a \| b`  | either met          | `b` skipped if `a` met   | `a`'s error                    |
//! | `a ^ b`   | exactly one met     | never                | `a`'s error, or own fallback if both met |

mod binary;
mod group;
mod negate;
mod ops;

pub use binary::{AndNeed, OrNeed, XorNeed};
pub use group::{AllNeed, AnyNeed, all_of, any_of};
pub use negate::NotNeed;
