//! UI Components

mod editable_text;
mod feedback_banner;
mod item_list;
mod item_row;
mod new_item_form;

pub use editable_text::EditableText;
pub use feedback_banner::FeedbackBanner;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
