//! GraphPoet Poem Prelude: convenient imports for common usage.
//!
//! ```rust
//! use graphpoet_poem::prelude::*;
//! ```

// Re-export bridge selection
pub use crate::bridge::{find_bridge, rank_bridges, Bridge};

// Re-export poem assembly
pub use crate::poet::{GraphPoet, Poem, PoemToken};

// Re-export from runtime
pub use graphpoet_runtime::prelude::*;
