//! Component data model.
//!
//! * [`ComponentRecord`] / [`ComponentProperties`]: one typed component.
//! * [`ComponentList`]: the ordered, flat list a session manipulates.
//! * [`IdGenerator`]: opaque id sources ([`RandomIds`], [`SequentialIds`]).
//! * [`StylePresets`]: named default styles applied at creation time.

pub mod id;
pub mod list;
pub mod preset;
pub mod types;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use id::{IdGenerator, RandomIds, SequentialIds};
pub use list::ComponentList;
pub use preset::{ButtonPreset, ClassPreset, PresetName, StylePreset, StylePresets};
pub use types::{
    ButtonProps, ButtonSize, ButtonVariant, CardProps, ComponentKind, ComponentProperties,
    ComponentRecord, InputProps, InputType,
};
