//! Play data model
//!
//! A play is a named, diagrammed scheme: labeled player markers placed in
//! normalized field coordinates, plus optional movement paths (one
//! committed path per marker). Plays live in a [`Playbook`].

pub mod marker;
pub mod path;
#[allow(clippy::module_inception)]
pub mod play;
pub mod playbook;
pub mod templates;

pub use marker::{MarkerId, PlayerMarker, Side};
pub use path::PlayerPath;
pub use play::{Play, MARKER_HIT_RADIUS};
pub use playbook::Playbook;
pub use templates::builtin_plays;
