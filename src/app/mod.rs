pub mod clean_use_case;
pub mod output_filter;
pub mod ports;
