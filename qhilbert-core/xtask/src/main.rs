use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build and benchmark automation for qhilbert-core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the bench-suite built for the specified CPU level
    Bench {
        #[arg(long, short, value_enum, default_value_t = Target::X86_64)]
        target: Target,

        /// Run with --release
        #[arg(long, default_value_t = true)]
        release: bool,

        /// Pin the benchmark process to a specific CPU core (using taskset)
        #[arg(long, short = 'p')]
        pin_core: Option<usize>,

        /// Curve order passed to the bench-suite
        #[arg(long, short = 'o')]
        order: Option<u32>,

        /// Benchmark every predefined curve size
        #[arg(long, default_value_t = false)]
        all_curves: bool,
    },
    /// Checks compilation for all supported targets and CPU levels
    CheckAll,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Target {
    /// Baseline x86-64 (SSE2: 4 lanes)
    #[value(name = "x86-64")]
    X86_64,
    /// x86-64-v3 (AVX2 + BMI2: 8 lanes, PEXT)
    #[value(name = "x86-64-v3")]
    X86_64V3,
    /// x86-64-v4 (AVX-512: 16 lanes, PEXT)
    #[value(name = "x86-64-v4")]
    X86_64V4,
    /// Linux on ARM64 with NEON (using cross)
    Aarch64,
}

impl Target {
    /// `-C target-cpu` level for native x86 targets.
    fn cpu(self) -> Option<&'static str> {
        match self {
            Target::X86_64 => Some("x86-64"),
            Target::X86_64V3 => Some("x86-64-v3"),
            Target::X86_64V4 => Some("x86-64-v4"),
            Target::Aarch64 => None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        Commands::Bench {
            target,
            release,
            pin_core,
            order,
            all_curves,
        } => {
            run_bench(&sh, target, release, pin_core, order, all_curves)?;
        }
        Commands::CheckAll => {
            check_all(&sh)?;
        }
    }

    Ok(())
}

fn run_bench(
    sh: &Shell,
    target: Target,
    release: bool,
    pin_core: Option<usize>,
    order: Option<u32>,
    all_curves: bool,
) -> Result<()> {
    // Assume running from project root
    let profile_flag = if release { "--release" } else { "" };

    let prefix = match pin_core {
        Some(c) => format!("taskset -c {} ", c),
        None => String::new(),
    };

    let mut app_args = String::from("--");
    if let Some(order) = order {
        app_args.push_str(&format!(" --order {}", order));
    }
    if all_curves {
        app_args.push_str(" --all-curves");
    }

    match target.cpu() {
        Some(cpu) => {
            println!(">> Benchmarking {} (Native)...", cpu);
            if let Some(c) = pin_core {
                println!("   (Pinned to Core {})", c);
            }
            // The CPU level fixes the widest lane width and the PEXT path.
            let rust_flags = format!("-C target-cpu={}", cpu);
            let _env = sh.push_env("RUSTFLAGS", rust_flags);

            println!("   [Clean] Cleaning bench-suite...");
            cmd!(sh, "cargo clean -p bench-suite").run()?;

            let cmd_str = format!(
                "{}cargo run -p bench-suite {} {}",
                prefix, profile_flag, app_args
            );
            cmd!(sh, "bash -c {cmd_str}").run()?;
        }
        None => {
            println!(">> Benchmarking Aarch64 (via Cross)...");
            // Requires 'cross' installed
            ensure_cross(sh)?;

            // Clean before building to avoid GLIBC mismatches with cross container
            println!("   [Clean] Cleaning bench-suite...");
            cmd!(sh, "cargo clean").run()?;

            let cmd_str = format!(
                "{}cross run --target aarch64-unknown-linux-gnu -p bench-suite {} {}",
                prefix, profile_flag, app_args
            );
            cmd!(sh, "bash -c {cmd_str}").run()?;
        }
    }
    Ok(())
}

fn check_all(sh: &Shell) -> Result<()> {
    // Assume running from project root
    for cpu in ["x86-64", "x86-64-v3", "x86-64-v4"] {
        println!("--- Checking {} ---", cpu);
        let _env = sh.push_env("RUSTFLAGS", format!("-C target-cpu={}", cpu));
        cmd!(sh, "cargo check --workspace --all-targets --release").run()?;
    }

    println!("--- Checking Aarch64 ---");
    ensure_cross(sh)?;
    cmd!(
        sh,
        "cross check --target aarch64-unknown-linux-gnu --workspace --release"
    )
    .run()?;

    println!("--- Checking Wasm32 (core only) ---");
    ensure_target(sh, "wasm32-unknown-unknown")?;
    {
        let _env = sh.push_env("RUSTFLAGS", "-C target-feature=+simd128");
        cmd!(
            sh,
            "cargo check --target wasm32-unknown-unknown -p qhilbert-core --release"
        )
        .run()?;
    }

    println!("--- Checking no_std (thumbv7em-none-eabihf, core only) ---");
    ensure_target(sh, "thumbv7em-none-eabihf")?;
    cmd!(
        sh,
        "cargo check --target thumbv7em-none-eabihf -p qhilbert-core --release"
    )
    .run()?;

    println!(">> All targets checked successfully.");
    Ok(())
}

fn ensure_cross(sh: &Shell) -> Result<()> {
    if cmd!(sh, "cross --version").read().is_err() {
        println!("!! 'cross' is not installed. Installing via cargo...");
        cmd!(sh, "cargo install cross").run()?;
    }
    Ok(())
}

fn ensure_target(sh: &Shell, target: &str) -> Result<()> {
    let output = cmd!(sh, "rustup target list --installed").read()?;
    if !output.contains(target) {
        println!("!! Target '{}' not found. Installing via rustup...", target);
        cmd!(sh, "rustup target add {target}").run()?;
    }
    Ok(())
}
