mod analyze_contract;
mod analyze_pdf;
mod analyze_query;
mod health;
mod upload;

pub use analyze_contract::analyze_contract_handler;
pub use analyze_pdf::analyze_pdf_handler;
pub use analyze_query::analyze_query_handler;
pub use health::health_handler;
