mod formatter;

pub use formatter::{RecipeFormatter, title_case};
