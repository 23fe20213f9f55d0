pub mod default_registry;
#[cfg(any(test, feature = "testing"))]
pub mod tracer;
