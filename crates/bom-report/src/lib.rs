//! Plain-text reports for a resolved rig: the shopping list, the headline
//! measurements and the blueprint cut list.

pub mod cut_list;
pub mod materials;
pub mod measurements;

pub use cut_list::cut_list_text;
pub use materials::{materials_list, MaterialSection, MaterialsList};
pub use measurements::{measurements, Measurement, Measurements};
