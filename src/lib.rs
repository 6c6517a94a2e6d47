pub mod app;
pub mod data;
pub mod model;
pub mod session;
pub mod storage;
pub mod timer;
pub mod ui;

pub use app::QuizApp;
