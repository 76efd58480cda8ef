//! Binding resolution: from a component to its style.

mod binding;
mod cache;
mod repository;
mod resolver;

pub use binding::{Binding, BindingKind};
pub use cache::{ResolveKey, StyleCache};
pub use repository::StyleRepository;
pub use resolver::{BindingPrecedence, CascadeMode, StyleResolver};
