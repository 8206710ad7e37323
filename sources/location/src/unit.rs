use std::sync::Arc;

use runtime::object::class::Class;

/// What the resolver needs to know about a loaded class.
pub trait CodeUnit {
    fn simple_name(&self) -> String;

    /// Dotted name with nested classes separated by `.` as well.
    fn canonical_name(&self) -> String;

    /// The embedded origin of the class, if the runtime recorded one.
    fn code_source_location(&self) -> Option<String>;

    /// URL of the resource `name`, looked up relative to the class.
    fn resource(&self, name: &str) -> Option<String>;
}

impl CodeUnit for Class {
    fn simple_name(&self) -> String {
        Class::simple_name(self).to_string()
    }

    fn canonical_name(&self) -> String {
        Class::canonical_name(self)
    }

    fn code_source_location(&self) -> Option<String> {
        self.protection_domain().location().map(str::to_string)
    }

    fn resource(&self, name: &str) -> Option<String> {
        Class::resource(self, name)
    }
}

impl<T: CodeUnit + ?Sized> CodeUnit for Arc<T> {
    fn simple_name(&self) -> String {
        (**self).simple_name()
    }

    fn canonical_name(&self) -> String {
        (**self).canonical_name()
    }

    fn code_source_location(&self) -> Option<String> {
        (**self).code_source_location()
    }

    fn resource(&self, name: &str) -> Option<String> {
        (**self).resource(name)
    }
}
