pub mod check;
pub mod rewrite;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    Plain,
    #[default]
    Pretty,
    Json,
}
