mod admin_tests;
mod auth_tests;
mod dashboard_tests;
mod folder_tests;
mod project_tests;
