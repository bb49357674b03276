pub mod search;
pub mod traversal;

pub use search::SearchProblem;
pub use traversal::TraversalProblem;
