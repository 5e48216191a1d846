pub mod app;
pub mod calendar;
pub mod dataset;
pub mod errors;
pub mod handlers;
pub mod meta;
pub mod models;
pub mod navigator;
pub mod state;
pub mod ui;

pub use app::router;
pub use dataset::{resolve_dataset_path, Dataset, LoadError};
pub use navigator::Cursor;
pub use state::AppState;
