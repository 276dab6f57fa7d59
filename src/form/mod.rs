pub mod progress;
pub mod wizard;

pub use progress::{clear_progress, load_progress, save_progress, Progress, PROGRESS_VERSION};
pub use wizard::Wizard;
