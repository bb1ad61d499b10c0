mod args;
mod output;
mod source;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{print_json, print_plain};
pub(crate) use source::collect_options;
