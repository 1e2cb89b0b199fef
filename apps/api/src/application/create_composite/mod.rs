pub mod data_url;
pub mod dto;
pub mod use_case;
