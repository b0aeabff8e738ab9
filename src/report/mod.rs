//! Human-readable reporting.
//!
//! Everything here is pure: records are borrowed immutably and rendered to
//! text.

mod pay_format;
mod statements;

pub use pay_format::format_pay;
pub use statements::{
    base_statements, format_name_list, introduce, role_with_article, say_description, say_email,
    say_id_and_role, say_languages, say_pay_amount, say_supervised_employees,
};
