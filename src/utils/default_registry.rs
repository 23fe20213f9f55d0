//! Definition of the [`StaticDefault`] trait, the process-wide registry of default values.

use std::any::type_name;
use std::sync::OnceLock;

use generic_singleton::get_or_init;
use log::debug;


/// One shared, default-constructed instance per type.
///
/// The instance is created on first use and lives until the process exits. It is never mutated,
/// so every caller asking for the default of the same type observes the same instance, down to
/// its address.
///
/// # Implementation detail
/// Under the hood the **[`generic_singleton`]** crate hands out one static [`OnceLock`] per type.
/// The lock makes sure that even racing first callers construct exactly one instance.
///
/// [`generic_singleton`]: https://docs.rs/generic_singleton/latest/generic_singleton/
pub trait StaticDefault: Default + Send + Sync + 'static {
    /// Returns a reference to the shared default instance of `Self`.
    ///
    /// When called for the first time for a specific type, the instance is constructed via
    /// [`Default::default`]. Repeated calls simply return it.
    ///
    /// # Example
    /// ```rust
    /// use select_default::utils::default_registry::StaticDefault;
    ///
    /// let first = String::static_default();
    /// let second = String::static_default();
    /// assert!(first.is_empty());
    /// assert!(std::ptr::eq(first, second));
    /// ```
    fn static_default() -> &'static Self {
        let cell: &'static OnceLock<Self> = get_or_init!(|| OnceLock::new());
        cell.get_or_init(|| {
            debug!("constructing static default for `{}`", type_name::<Self>());
            Self::default()
        })
    }
}


impl<T: Default + Send + Sync + 'static> StaticDefault for T {}


/// Shorthand for [`StaticDefault::static_default`].
pub fn default_of<T: StaticDefault>() -> &'static T {
    T::static_default()
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;

    #[test]
    fn test_identity_stable() {
        let first: &'static Vec<u8> = default_of();
        let second: &'static Vec<u8> = default_of();
        assert!(std::ptr::eq(first, second));
        assert!(first.is_empty());
    }

    #[test]
    fn test_one_instance_per_type() {
        #[derive(Default)]
        struct Left(#[allow(dead_code)] u8);

        #[derive(Default)]
        struct Right(#[allow(dead_code)] u8);

        let left = default_of::<Left>() as *const Left as usize;
        let right = default_of::<Right>() as *const Right as usize;
        assert_ne!(left, right);
        assert_eq!(default_of::<Left>() as *const Left as usize, left);
    }

    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

    struct Counted(usize);

    impl Default for Counted {
        fn default() -> Self {
            Counted(CONSTRUCTED.fetch_add(1, Ordering::SeqCst))
        }
    }

    #[test]
    fn test_concurrent_first_use() {
        let addresses: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| default_of::<Counted>() as *const Counted as usize))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 1);
        assert_eq!(default_of::<Counted>().0, 0);
    }
}
