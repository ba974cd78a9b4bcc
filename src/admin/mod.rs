//! The admin dashboard page.

pub mod actions;
pub mod controller;
pub mod dashboard;
pub mod modal;
pub mod page;
pub mod state;
pub mod surface;
pub mod tables;

pub use actions::{ActionHandler, ActionId, ActionRegistry, ActionTarget};
pub use controller::{ADMIN_DESTINATION, AdminController, AdminInit};
pub use dashboard::DashboardStats;
pub use modal::ModalState;
pub use page::AdminPage;
pub use state::AdminUiState;
pub use surface::AdminSurface;
pub use tables::{PageInfo, TableKind, TableView};
