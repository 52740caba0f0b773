mod container;
mod field;
mod rename_all;
mod weight;
mod widget;

pub use container::ContainerAttrs;
pub use field::FieldAttrs;
pub use rename_all::RenameAll;
pub use weight::Weight;
pub use widget::{WidgetAttr, WidgetSettingsAttr};
