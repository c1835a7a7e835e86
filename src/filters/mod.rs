pub mod parser;
pub mod state;

pub use parser::parse_filter;
pub use state::FilterState;
