mod output_contracts;
mod parse_matrix;
mod scenario;
pub mod support;
