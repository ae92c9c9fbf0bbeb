pub mod dashboard_service;
pub mod goal_service;
pub mod story_service;
pub mod transaction_service;
