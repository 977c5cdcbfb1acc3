pub mod browse;
pub mod filter;
pub mod state;
pub mod view;

pub use state::DashboardState;
pub use view::render;
