pub mod field_select;
pub mod json_input;
pub mod response_view;
pub mod status_banner;
