//! Playback for the pathfinding visualizer: paces an
//! [`AlgorithmRunner`](pathviz_paths::AlgorithmRunner) with timer effects and
//! reveals the found path cell by cell.

mod playback;

pub use playback::{
    AUTO_STEP_INTERVAL, PATH_REVEAL_INTERVAL, PlaybackConfig, PlaybackController, PlaybackStatus,
    PlaybackTick, TickKind,
};
