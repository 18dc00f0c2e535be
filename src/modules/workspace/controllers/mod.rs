mod workspace_controller;

pub use workspace_controller::configure_routes;
