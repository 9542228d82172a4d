pub mod repository;
pub mod view_model;
pub mod window;

pub use view_model::{GrossPayrollViewModel, WindowError};
pub use window::{
    derive_end_from_start, derive_start_from_end, is_selectable_anchor, DerivedEnd, PayrollWindow,
};
