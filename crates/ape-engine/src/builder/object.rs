use std::any::type_name;
use std::fmt;

/// Builder that owns at most one object at a time.
///
/// States:
/// - *empty*: nothing held; the next access creates an object through the factory
/// - *holding*: an object is being configured
///
/// [`build`](ObjectBuilder::build) hands the held object to the caller and
/// returns the builder to *empty*. Dropping a builder while *holding* drops the
/// unbuilt object with it.
pub struct ObjectBuilder<T, F = fn() -> T>
where
    F: FnMut() -> T,
{
    held: Option<T>,
    factory: F,
}

impl<T: Default> ObjectBuilder<T> {
    /// Builder creating objects with `T::default()`.
    pub fn new() -> Self {
        Self::with_factory(T::default)
    }
}

impl<T: Default> Default for ObjectBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> ObjectBuilder<T, F>
where
    F: FnMut() -> T,
{
    /// Builder creating objects with a custom factory.
    pub fn with_factory(factory: F) -> Self {
        Self { held: None, factory }
    }

    /// True while an unbuilt object is held.
    #[inline]
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// The held object, created on first access.
    pub fn object_mut(&mut self) -> &mut T {
        let factory = &mut self.factory;
        self.held.get_or_insert_with(|| {
            log::trace!("builder: creating {}", type_name::<T>());
            factory()
        })
    }

    /// Applies `f` to the held object and returns the builder for chaining.
    pub fn with(&mut self, f: impl FnOnce(&mut T)) -> &mut Self {
        f(self.object_mut());
        self
    }

    /// Releases the held object (creating one if nothing is held).
    ///
    /// The builder no longer references the returned object; further calls
    /// start a fresh one.
    pub fn build(&mut self) -> T {
        match self.held.take() {
            Some(obj) => obj,
            None => {
                log::trace!("builder: building {} without configuration", type_name::<T>());
                (self.factory)()
            }
        }
    }

    /// Drops the held object, if any, without building it.
    pub fn discard(&mut self) {
        if self.held.take().is_some() {
            log::trace!("builder: discarded unbuilt {}", type_name::<T>());
        }
    }
}

impl<T, F> Drop for ObjectBuilder<T, F>
where
    F: FnMut() -> T,
{
    fn drop(&mut self) {
        if self.held.is_some() {
            log::debug!("builder dropped while holding an unbuilt {}", type_name::<T>());
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for ObjectBuilder<T, F>
where
    F: FnMut() -> T,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectBuilder").field("held", &self.held).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Counts live instances through a shared counter.
    struct Tracked {
        live: Rc<Cell<i32>>,
        value: i32,
    }

    impl Tracked {
        fn new(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            Self { live: Rc::clone(live), value: 0 }
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn lazily_creates_on_first_access() {
        let live = Rc::new(Cell::new(0));
        let mut b = ObjectBuilder::with_factory(|| Tracked::new(&live));
        assert!(!b.is_holding());
        assert_eq!(live.get(), 0);

        b.object_mut().value = 3;
        b.object_mut().value += 1;
        assert!(b.is_holding());
        assert_eq!(live.get(), 1);
        assert_eq!(b.build().value, 4);
    }

    #[test]
    fn build_releases_exactly_once() {
        let mut b: ObjectBuilder<Vec<i32>> = ObjectBuilder::new();
        b.with(|v| v.push(1)).with(|v| v.push(2));
        let first = b.build();
        assert_eq!(first, vec![1, 2]);
        assert!(!b.is_holding());

        // Next access starts from a fresh object.
        let second = b.with(|v| v.push(9)).build();
        assert_eq!(second, vec![9]);
    }

    #[test]
    fn build_without_configuration_returns_default() {
        let mut b: ObjectBuilder<String> = ObjectBuilder::default();
        assert_eq!(b.build(), "");
        assert!(!b.is_holding());
    }

    #[test]
    fn dropping_holding_builder_drops_object() {
        let live = Rc::new(Cell::new(0));
        {
            let mut b = ObjectBuilder::with_factory(|| Tracked::new(&live));
            b.object_mut();
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn built_object_outlives_builder() {
        let live = Rc::new(Cell::new(0));
        let obj = {
            let mut b = ObjectBuilder::with_factory(|| Tracked::new(&live));
            b.with(|t| t.value = 7).build()
        };
        assert_eq!(live.get(), 1);
        assert_eq!(obj.value, 7);
        drop(obj);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn discard_drops_held_object() {
        let live = Rc::new(Cell::new(0));
        let mut b = ObjectBuilder::with_factory(|| Tracked::new(&live));
        b.object_mut();
        b.discard();
        assert!(!b.is_holding());
        assert_eq!(live.get(), 0);
    }
}
