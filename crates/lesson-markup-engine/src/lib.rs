pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::*;
pub use models::lesson::*;
pub use parsing::{
    ParsedBullet,
    bullet::{ClassifiedBullet, classify},
    inline::{TextSegment, scan},
    parse_bullet,
};
