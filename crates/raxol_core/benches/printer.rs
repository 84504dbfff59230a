//! `Emulator::feed_bytes` throughput profiler, modeled on
//! `raxol_vterm`'s own parser profiler.
//!
//! # Usage
//!
//! ```sh
//! cargo bench --bench printer
//! cargo bench --bench printer -- --size large
//! cargo bench --bench printer -- --kind csi --kind unicode
//! cargo bench --bench printer -- --help
//! ```

use std::collections::HashSet;
use std::hint::black_box;
use std::time::{Duration, Instant};

use raxol_core::{Config, Emulator};

/// Buffer size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" | "s" => Some(Size::Small),
            "medium" | "m" => Some(Size::Medium),
            "large" | "l" => Some(Size::Large),
            _ => None,
        }
    }

    fn all() -> HashSet<Size> {
        [Size::Small, Size::Medium, Size::Large].into_iter().collect()
    }

    fn buffer_size(&self) -> usize {
        match self {
            Size::Small => 4 * 1024,
            Size::Medium => 256 * 1024,
            Size::Large => 4 * 1024 * 1024,
        }
    }

    fn iterations(&self) -> usize {
        match self {
            Size::Small => 2_000,
            Size::Medium => 200,
            Size::Large => 20,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Size::Small => "4KB",
            Size::Medium => "256KB",
            Size::Large => "4MB",
        }
    }
}

/// Feed-data kind category, covering the emulator's major dispatch paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Kind {
    Ascii,
    Unicode,
    Sgr,
    Csi,
    ScrollHeavy,
}

impl Kind {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ascii" | "plain" => Some(Kind::Ascii),
            "unicode" | "utf8" => Some(Kind::Unicode),
            "sgr" | "color" => Some(Kind::Sgr),
            "csi" | "cursor" => Some(Kind::Csi),
            "scroll" | "scrollheavy" => Some(Kind::ScrollHeavy),
            _ => None,
        }
    }

    fn all() -> HashSet<Kind> {
        [Kind::Ascii, Kind::Unicode, Kind::Sgr, Kind::Csi, Kind::ScrollHeavy]
            .into_iter()
            .collect()
    }

    fn label(&self) -> &'static str {
        match self {
            Kind::Ascii => "Plain ASCII",
            Kind::Unicode => "Unicode text",
            Kind::Sgr => "SGR-heavy",
            Kind::Csi => "CSI cursor motion",
            Kind::ScrollHeavy => "Scroll-heavy",
        }
    }

    fn generate(&self, size: usize) -> Vec<u8> {
        match self {
            Kind::Ascii => generate_plain_text(size),
            Kind::Unicode => generate_unicode_text(size),
            Kind::Sgr => generate_sgr_text(size),
            Kind::Csi => generate_csi_motion(size),
            Kind::ScrollHeavy => generate_scroll_lines(size),
        }
    }
}

struct BenchConfig {
    name: String,
    iterations: usize,
    data: Vec<u8>,
}

impl BenchConfig {
    fn new(size: Size, kind: Kind) -> Self {
        let name = format!("{} ({})", kind.label(), size.label());
        let data = kind.generate(size.buffer_size());
        Self { name, iterations: size.iterations(), data }
    }
}

struct Options {
    sizes: HashSet<Size>,
    kinds: HashSet<Kind>,
}

impl Options {
    fn parse() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut sizes = HashSet::new();
        let mut kinds = HashSet::new();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => {
                    print_help();
                    std::process::exit(0);
                }
                "-s" | "--size" => {
                    i += 1;
                    let value = args.get(i).ok_or("--size requires a value")?;
                    let size = Size::from_str(value)
                        .ok_or_else(|| format!("invalid size '{value}'"))?;
                    sizes.insert(size);
                }
                "-k" | "--kind" => {
                    i += 1;
                    let value = args.get(i).ok_or("--kind requires a value")?;
                    let kind = Kind::from_str(value)
                        .ok_or_else(|| format!("invalid kind '{value}'"))?;
                    kinds.insert(kind);
                }
                _ => {}
            }
            i += 1;
        }

        if sizes.is_empty() {
            sizes = Size::all();
        }
        if kinds.is_empty() {
            kinds = Kind::all();
        }

        Ok(Self { sizes, kinds })
    }
}

fn print_help() {
    eprintln!(
        r#"raxol_core printer profiler

USAGE:
    cargo bench --bench printer -- [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -s, --size <SIZE>       Buffer size: small (4KB), medium (256KB), large (4MB)
    -k, --kind <KIND>       Feed kind: ascii, unicode, sgr, csi, scroll
"#
    );
}

fn generate_plain_text(size: usize) -> Vec<u8> {
    let text = "The quick brown fox jumps over the lazy dog. ";
    text.as_bytes().iter().cycle().take(size).copied().collect()
}

fn generate_unicode_text(size: usize) -> Vec<u8> {
    let text = "Hello 世界! 🦀 Rust café Ω α β γ. ";
    text.as_bytes().iter().cycle().take(size).copied().collect()
}

fn generate_sgr_text(size: usize) -> Vec<u8> {
    let mut result = Vec::new();
    let patterns = [
        b"\x1b[1;31mRed\x1b[0m ".as_slice(),
        b"\x1b[32mGreen\x1b[0m ".as_slice(),
        b"\x1b[38;5;208mOrange\x1b[0m ".as_slice(),
        b"\x1b[48;2;10;20;30mRGB bg\x1b[0m ".as_slice(),
    ];
    let mut idx = 0;
    while result.len() < size {
        result.extend_from_slice(patterns[idx % patterns.len()]);
        idx += 1;
    }
    result.truncate(size);
    result
}

fn generate_csi_motion(size: usize) -> Vec<u8> {
    let mut result = Vec::new();
    let sequences = [
        b"\x1b[A".as_slice(),
        b"\x1b[B".as_slice(),
        b"\x1b[10;20H".as_slice(),
        b"\x1b[2K".as_slice(),
        b"\x1b[5;10r".as_slice(),
    ];
    let mut idx = 0;
    while result.len() < size {
        result.extend_from_slice(sequences[idx % sequences.len()]);
        result.extend_from_slice(b"x");
        idx += 1;
    }
    result.truncate(size);
    result
}

fn generate_scroll_lines(size: usize) -> Vec<u8> {
    let mut result = Vec::new();
    let mut n = 0usize;
    while result.len() < size {
        result.extend_from_slice(format!("line {n}\r\n").as_bytes());
        n += 1;
    }
    result.truncate(size);
    result
}

fn run_benchmark(config: &BenchConfig) -> Duration {
    let start = Instant::now();

    for _ in 0..config.iterations {
        let mut emulator = Emulator::new(Config::new(24, 80)).expect("valid config");
        let data = black_box(&config.data);
        emulator.feed_bytes(data);
        black_box(emulator.take_pending_responses());
    }

    start.elapsed()
}

fn main() {
    let options = match Options::parse() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    };

    println!("raxol_core printer profile");
    println!("==========================\n");

    let mut sizes: Vec<_> = options.sizes.iter().collect();
    sizes.sort_by_key(|s| match s {
        Size::Small => 0,
        Size::Medium => 1,
        Size::Large => 2,
    });
    let mut kinds: Vec<_> = options.kinds.iter().collect();
    kinds.sort_by_key(|k| match k {
        Kind::Ascii => 0,
        Kind::Unicode => 1,
        Kind::Sgr => 2,
        Kind::Csi => 3,
        Kind::ScrollHeavy => 4,
    });

    for &size in &sizes {
        for &kind in &kinds {
            let config = BenchConfig::new(*size, *kind);
            let elapsed = run_benchmark(&config);
            let total_bytes = config.data.len() * config.iterations;
            let throughput_mbs =
                (total_bytes as f64 / 1_000_000.0) / elapsed.as_secs_f64();

            println!(
                "{:<28} {:>6} iters  {:>8.2} ms  {:>10.2} MB/s",
                config.name,
                config.iterations,
                elapsed.as_secs_f64() * 1000.0,
                throughput_mbs
            );
        }
    }

    println!("\nProfile complete!");
}
