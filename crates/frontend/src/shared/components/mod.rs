pub mod badge;
pub mod confirm_dialog;
pub mod empty_state;
pub mod filter_panel;
pub mod form_fields;
pub mod image_gallery;
pub mod pagination_controls;
pub mod sortable_header;
