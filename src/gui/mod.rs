//! GUI module - Sidebar and dashboard pages

mod app;
mod banner;
mod exploration;
mod introduction;
mod sidebar;
mod visualization;

pub use app::DashboardApp;
pub use exploration::ExplorationPage;
pub use introduction::IntroductionPage;
pub use visualization::VisualizationPage;
