//! # GraphPoet Poem
//!
//! Bridge-word poetry over a corpus word graph.
//!
//! A corpus is turned into a graph whose edge `a -> b` counts how often
//! `b` directly follows `a`. Given an input phrase, every consecutive word
//! pair is enriched with the vertex that best connects them through two
//! edges.
//!
//! | Step | What happens |
//! |------|--------------|
//! | Build | Adjacent corpus words become weighted edges |
//! | Select | For `(w1, w2)` pick `b` maximizing `w1 -> b` + `b -> w2` |
//! | Assemble | Insert each selected `b` between the words it bridges |

pub mod bridge;
pub mod poet;
pub mod prelude;

pub use bridge::{find_bridge, rank_bridges, Bridge};
pub use poet::{GraphPoet, Poem, PoemToken};
