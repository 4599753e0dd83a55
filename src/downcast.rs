use std::any::TypeId;

/// Reports the type of the concrete value behind a trait object.
///
/// This is similar to [`Any::type_id`](std::any::Any::type_id), except that
/// the type id is computed by [`typeid::of`], which ignores lifetimes. This
/// allows downcasting trait objects whose concrete types borrow data, such as
/// erased slice cursors.
pub trait ConcreteType {
    fn concrete_type(&self) -> TypeId;
}

/// Allows downcasting a trait object to a concrete type.
///
/// This is implemented for `dyn ErasedInput`, which has [`ConcreteType`] as a
/// supertrait.
pub(crate) trait DowncastDyn {
    fn is<M>(&self) -> bool;
    fn downcast_ref<M>(&self) -> Option<&M>;
}

/// Implement [`DowncastDyn`] for a trait with a lifetime and item type
/// parameter. The trait must have `ConcreteType` as a supertrait.
macro_rules! impl_downcastdyn {
    ($trait:ident) => {
        impl<'a, T> $crate::downcast::DowncastDyn for dyn $trait<'a, T> + 'a {
            fn is<M>(&self) -> bool {
                typeid::of::<M>() == $crate::downcast::ConcreteType::concrete_type(self)
            }

            fn downcast_ref<M>(&self) -> Option<&M> {
                if self.is::<M>() {
                    // SAFETY: `is` ensures the value is an `M`, up to lifetime
                    // parameters. Those are bounded by `'a`, as is the trait
                    // object, and the result is only used for shared access.
                    Some(unsafe { &*(self as *const Self as *const M) })
                } else {
                    None
                }
            }
        }
    };
}

pub(crate) use impl_downcastdyn;

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::{impl_downcastdyn, ConcreteType, DowncastDyn};

    trait Named<'a, T>: ConcreteType {
        fn name(&self) -> &'a str;
    }
    impl_downcastdyn!(Named);

    struct Borrowed<'a> {
        name: &'a str,
    }

    impl ConcreteType for Borrowed<'_> {
        fn concrete_type(&self) -> TypeId {
            typeid::of::<Self>()
        }
    }

    impl<'a> Named<'a, ()> for Borrowed<'a> {
        fn name(&self) -> &'a str {
            self.name
        }
    }

    struct Fixed;

    impl ConcreteType for Fixed {
        fn concrete_type(&self) -> TypeId {
            typeid::of::<Self>()
        }
    }

    impl<'a> Named<'a, ()> for Fixed {
        fn name(&self) -> &'a str {
            "fixed"
        }
    }

    #[test]
    fn test_downcast_ref() {
        let name = String::from("borrowed");
        let borrowed = Borrowed { name: &name };
        let fixed = Fixed;

        let borrowed_dyn: &dyn Named<'_, ()> = &borrowed;
        let fixed_dyn: &dyn Named<'_, ()> = &fixed;

        assert_eq!(borrowed_dyn.name(), "borrowed");
        assert_eq!(fixed_dyn.name(), "fixed");

        assert!(borrowed_dyn.is::<Borrowed>());
        assert!(!borrowed_dyn.is::<Fixed>());
        assert!(std::ptr::eq(
            borrowed_dyn.downcast_ref::<Borrowed>().unwrap(),
            &borrowed
        ));
        assert!(borrowed_dyn.downcast_ref::<Fixed>().is_none());

        assert!(fixed_dyn.is::<Fixed>());
        assert!(fixed_dyn.downcast_ref::<Borrowed>().is_none());
    }
}
