pub mod use_setup_form;
