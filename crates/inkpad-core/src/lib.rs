//! InkPad Core Library
//!
//! Platform-agnostic shape model, gesture handling, and undo history for
//! the InkPad drawing surface.

pub mod board;
pub mod dispatch;
pub mod history;
pub mod pointer;
pub mod shapes;
pub mod storage;
pub mod tools;

pub use board::{Board, Drawing};
pub use dispatch::{DispatchState, GestureEffect, ToolDispatcher};
pub use history::History;
pub use pointer::{PointerEvent, PointerSession, SurfaceFrame};
pub use shapes::{Circle, Rectangle, Rgba, Shape, ShapeId, Stroke};
pub use storage::{KvStore, MemoryStore, PersistenceBridge, StorageError, StorageResult};
pub use tools::{ToolKind, ToolSettings};
