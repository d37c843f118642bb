use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts config options for the bookstore system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub store_id: String,
    pub max_search_results: usize,
    pub max_page_size: usize,
}

impl Configuration {
    pub fn new(store_id: &str) -> Self {
        Configuration {
            store_id: store_id.to_string(),
            max_search_results: 100,
            max_page_size: 50,
        }
    }
}
