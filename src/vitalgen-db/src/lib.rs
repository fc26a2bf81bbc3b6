mod db;
pub use db::DatabaseHandler;

mod generate;

mod search;
pub use search::SearchSamples;
