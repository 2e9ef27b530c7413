pub mod constraint;
pub mod domain;
pub mod model;

pub use constraint::PredicateFn;
pub use domain::Domain;
pub use model::Csp;
