macro_rules! value {
    ($target:ident: $kind:ty, $paramkind:ident, $that:expr) => {
        impl<'a> From<$kind> for crate::ast::Value<'a> {
            fn from($target: $kind) -> Self {
                crate::ast::Value::$paramkind(Some($that))
            }
        }

        impl<'a> From<$kind> for crate::ast::DatabaseValue<'a> {
            fn from($target: $kind) -> Self {
                let val: crate::ast::Value<'a> = $target.into();
                val.into()
            }
        }
    };
}
