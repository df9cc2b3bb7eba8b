//! Internal helpers shared by the cipher components.

pub(crate) mod wiring;
