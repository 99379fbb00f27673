mod check;
mod resolve;

pub use check::check_execute;
pub use resolve::resolve_execute;
