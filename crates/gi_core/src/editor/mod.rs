//! Diagram editor
//!
//! The interaction layer of the play diagram: the selected tool and the
//! gesture state machine that turns pointer events into geometry-store
//! mutations. The machine is headless; the host feeds it mapped field
//! coordinates and re-renders from the play after each call.

pub mod machine;
pub mod tool;

pub use machine::DiagramEditor;
pub use tool::ToolMode;
