pub mod controller;
pub mod file_select;
pub mod state;

pub use controller::UiController;
pub use file_select::FileSelection;
pub use state::UiState;
