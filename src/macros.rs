#[macro_export]
macro_rules! ini {
    // Handle empty document
    ({}) => {
        $crate::IniMap::new()
    };

    // Handle non-empty document
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut root = $crate::IniMap::new();
        $(
            root.insert($key.to_string(), $crate::ini_entry!($value));
        )*
        root
    }};
}

// Classifies one entry: a braced group is a section, anything else a scalar.
#[doc(hidden)]
#[macro_export]
macro_rules! ini_entry {
    ({ $($k:literal : $v:expr),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut section = $crate::SectionMap::new();
        $(
            section.insert($k.to_string(), $crate::Value::from($v));
        )*
        $crate::Entry::Section(section)
    }};
    ($v:expr) => {
        $crate::Entry::Scalar($crate::Value::from($v))
    };
}
