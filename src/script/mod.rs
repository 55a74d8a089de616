pub mod parser;

pub use parser::{parse_script, parse_script_from_str, SpawnEvent};
