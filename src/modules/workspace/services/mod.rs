mod workspace_service;

pub use workspace_service::WorkspaceService;
