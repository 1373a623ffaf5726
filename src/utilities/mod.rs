pub mod csv_reader;
pub mod csv_writer;
pub mod dataset;
pub mod fetch_page;
pub mod request_delay;
pub mod storefront_url;
