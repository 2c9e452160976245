pub mod daisy_ui;
pub mod studio_footer;
