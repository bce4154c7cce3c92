//! # Markup Kinds
//!
//! Types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeBullet`**: `PREFIX = "CODE:"`, `SEP = ':'` - whole-bullet code sample
//! - **`CodeSpan`**: `TICK = b'\`'` - inline raw zone
//! - **`Bold`**: `DELIM = b"**"` - strong emphasis
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parsers use these constants; they never hardcode `**` or `` ` ``.

pub mod bold;
pub mod code_bullet;
pub mod code_span;

pub use bold::Bold;
pub use code_bullet::CodeBullet;
pub use code_span::CodeSpan;
