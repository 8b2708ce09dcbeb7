//! Console presentation used by the command-line binary.

pub mod display;
mod run;

pub use display::{
    render_case_json, render_case_result, render_cause_list, render_download, render_json,
};
pub use run::run_mode;
