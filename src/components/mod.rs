//! UI Components
//!
//! Reusable Leptos components.

mod bucket_item_row;
mod bucket_list_view;
mod diagnostics_panel;
mod flight_card;
mod flight_panel;
mod item_editor;

pub use bucket_item_row::BucketItemRow;
pub use bucket_list_view::BucketListView;
pub use diagnostics_panel::DiagnosticsPanel;
pub use flight_card::FlightCard;
pub use flight_panel::FlightPanel;
pub use item_editor::ItemEditor;
