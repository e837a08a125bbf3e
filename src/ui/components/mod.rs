pub mod footer;
pub mod header;
pub mod task_form;
pub mod task_list;
pub mod toast;
