//! Helpers over Java binary class names, e.g. `com.example.Outer$Inner`.

/// The name as written in source, without package or enclosing classes.
pub fn simple_name(binary_name: &str) -> &str {
    let unqualified = binary_name.rsplit('.').next().unwrap_or(binary_name);
    unqualified.rsplit('$').next().unwrap_or(unqualified)
}

/// `com.example.Outer$Inner` -> `com.example.Outer.Inner`
pub fn canonical_name(binary_name: &str) -> String {
    binary_name.replace('$', ".")
}

/// `com.example.Outer$Inner` -> `com/example/Outer$Inner`
pub fn internal_name(binary_name: &str) -> String {
    binary_name.replace('.', "/")
}

/// The internal name of the enclosing package, empty for the default package.
pub fn package_path(binary_name: &str) -> String {
    match binary_name.rfind('.') {
        Some(idx) => internal_name(&binary_name[..idx]),
        None => String::new(),
    }
}
