// Navigation shell for Enterprise Insights Copilot
pub mod domain;
pub mod shared;

// App is always available in fullstack mode
pub mod app;
