pub mod channels;
pub mod graph;
pub mod leaderboard;
pub mod scene;
pub mod selection;
pub mod shortcuts;
pub mod theme;

pub use channels::ChannelBank;
pub use scene::{SceneComposer, SceneLayout};
pub use selection::{HitRegionTable, SelectionController};
pub use shortcuts::{ShortcutAction, ShortcutManager};
