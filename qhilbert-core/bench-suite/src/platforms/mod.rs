/// A measurement result from a benchmark.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    /// Elapsed time in nanoseconds.
    pub nanos: f64,
}

/// A trait that abstracts the host platform's capabilities.
///
/// The suite only talks to the host through this trait, so timing and output
/// can be swapped without touching the benchmark logic.
pub trait BenchmarkHost {
    /// The type representing a point in time.
    type TimePoint: Copy;

    /// Returns the current time point.
    fn now() -> Self::TimePoint;

    /// Calculates the duration between `start` and now.
    fn measure(start: Self::TimePoint) -> Measurement;

    /// Prints a line to the platform's standard output.
    fn print(s: &str);

    /// Returns a human-readable name of the platform, including the lane width
    /// the build selected.
    fn platform_name() -> String;
}

mod native;
pub use native::Platform;
