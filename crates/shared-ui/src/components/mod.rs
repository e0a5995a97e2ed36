// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod form_select;
pub mod input;
pub mod label;
pub mod page_header;
pub mod separator;
pub mod skeleton;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use separator::*;
pub use skeleton::*;
