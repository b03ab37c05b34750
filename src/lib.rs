pub mod analytics;
pub mod api;
pub mod config;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod portal;
pub mod selection;

pub use config::Config;
pub use filter::LabelFilter;
pub use portal::AdminPortal;
pub use selection::SelectionSet;
