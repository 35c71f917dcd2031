use super::{BenchmarkHost, Measurement};
use qhilbert_core::LaneWidth;

/// Implementation for hosted environments (Linux, macOS, Windows).
/// Uses the standard library for high-precision timing and IO.
pub struct Platform;

impl BenchmarkHost for Platform {
    type TimePoint = std::time::Instant;

    fn now() -> Self::TimePoint {
        std::time::Instant::now()
    }

    fn measure(start: Self::TimePoint) -> Measurement {
        Measurement {
            nanos: start.elapsed().as_secs_f64() * 1_000_000_000.0,
        }
    }

    fn print(s: &str) {
        println!("{}", s);
    }

    fn platform_name() -> String {
        let bmi2 = if cfg!(all(target_arch = "x86_64", target_feature = "bmi2")) {
            ", BMI2"
        } else {
            ""
        };
        format!(
            "Host ({}) widest lanes {}{}",
            std::env::consts::ARCH,
            LaneWidth::widest(),
            bmi2
        )
    }
}
