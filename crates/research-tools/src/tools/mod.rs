//! Built-in tool implementations.

mod calculator;
mod data_analysis;
mod datetime;
mod file_reader;
mod save_file;
mod text;
mod web_scraper;
mod web_search;
mod wikipedia;

pub use calculator::{calculate, Calculator};
pub use data_analysis::DataAnalysis;
pub use datetime::{render_datetime, DateTimeInfo};
pub use file_reader::FileReader;
pub use save_file::{format_block, SaveToFile};
pub use web_scraper::{html_to_text, WebScraper, USER_AGENT};
pub use web_search::WebSearch;
pub use wikipedia::{Wikipedia, NO_RESULT as NO_WIKIPEDIA_RESULT};
