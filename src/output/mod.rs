pub mod formatter;

pub use formatter::{
    format_bar, format_currency, format_json, format_multiple, format_percent, format_questions,
    format_result, format_sectors, format_sub_sectors, format_tiers, should_use_colors, DISCLAIMER,
};
