//! # Builder Core
//!
//! Headless editing engine for block-based content builders (email and
//! landing-page editors).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  builder-core                    │
//! ├──────────────────────────────────────────────────┤
//! │  Model            │  Editing surfaces            │
//! │  - Blocks         │  - Settings panel drafts     │
//! │  - Pages          │  - Reorderable canvas mirror │
//! │  - Selection      │  - Inline editable fields    │
//! ├──────────────────────────────────────────────────┤
//! │  Intents          │  Session                     │
//! │  - Select/Update  │  - Owns page + selection     │
//! │  - Move/Reorder   │  - Applies intents           │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The session owns the canonical page and selection. Editing surfaces are
//! controlled views over that state: they mirror it, mutate local drafts,
//! and hand changes back as [`EditorIntent`] values for the session to
//! apply.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod block;
pub mod canvas;
pub mod editable;
pub mod error;
pub mod intent;
pub mod page;
pub mod preview;
pub mod registry;
pub mod selection;
pub mod session;
pub mod settings;

pub use block::{Block, BlockId, BlockType, LinkEntry, Properties};
pub use canvas::{CanvasItem, CanvasView};
pub use editable::{EditableField, FieldUpdate};
pub use error::{BuilderError, BuilderResult};
pub use intent::{EditorIntent, MoveDirection};
pub use page::{Page, PageId};
pub use preview::{PreviewDevice, PreviewMode};
pub use registry::{settings_form, FormControl, FormField, SettingsForm, UNAVAILABLE_MESSAGE};
pub use selection::SelectionState;
pub use session::EditorSession;
pub use settings::SettingsPanel;

/// Builder core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
