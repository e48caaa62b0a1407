//! Generic lazily-constructing object builder.
//!
//! Concrete builders (e.g. [`crate::window::WindowBuilder`]) wrap
//! [`ObjectBuilder`] and forward fluent setters to the held object instead of
//! layering builder traits.

mod object;

pub use object::ObjectBuilder;
