/// Emits a `tracing` event at the given level when the `tracing` feature is enabled, and expands
/// to nothing otherwise. The arguments are passed through to the matching `tracing` macro
/// unchanged, so field syntax like `power = 3` works as usual.
#[cfg(feature = "tracing")]
macro_rules! heap_log {
  ($level:ident, $($arg:tt)+) => {
    tracing::$level!($($arg)+)
  };
}

#[cfg(not(feature = "tracing"))]
macro_rules! heap_log {
  ($level:ident, $($arg:tt)+) => {};
}
