pub mod logging;
pub mod progress;
pub mod types;

pub use logging::*;
pub use progress::{create_publication_progress_bar, create_spinner};
pub use types::*;
