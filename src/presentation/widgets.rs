//! Reusable console widgets
//!
//! Stateless widgets composed by the components: buttons, input fields,
//! the simulation checkbox, the diagnostics indicator and the log list.

pub mod button;
pub mod checkbox;
pub mod indicator;
pub mod log_list;
pub mod text_field;

pub use button::Button;
pub use checkbox::Checkbox;
pub use indicator::Indicator;
pub use log_list::LogList;
pub use text_field::TextField;
