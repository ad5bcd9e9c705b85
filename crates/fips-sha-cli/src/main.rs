use anyhow::{bail, Context};
use clap::Parser;
use fips_sha_core::{decode_hex, to_hex_string};
use fips_sha_cpu::bench::{print_bench_results, run_bench_with_progress, BenchConfig, COMPONENTS};
use fips_sha_crypto::sha256::self_test;
use fips_sha_crypto::{Algorithm, HashAlgorithm, Sha256Context};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Read buffer for files and stdin.
const READ_CHUNK: usize = 64 * 1024;

/// Label used for standard input.
const STDIN_LABEL: &str = "-";

#[derive(Parser, Debug)]
#[command(
    name = "fips-sha",
    version,
    about = "SHA-256 (FIPS 180-4) hashing, verification and throughput benchmark"
)]
struct Args {
    /// Files to hash ("-" for stdin). Reads stdin when no input is given.
    #[arg()]
    files: Vec<String>,

    /// Hash a literal string (repeatable)
    #[arg(short = 's', long = "string")]
    strings: Vec<String>,

    /// Expected hex digest; compares it with the single input and exits 1 on mismatch
    #[arg(short = 'c', long = "check")]
    check: Option<String>,

    /// Hash algorithm
    #[arg(long = "algorithm", default_value = "sha256")]
    algorithm: Algorithm,

    /// Print one JSON object per input instead of "<digest>  <name>"
    #[arg(long = "json", default_value_t = false)]
    json: bool,

    /// Run the known-answer self test and exit
    #[arg(long = "self-test", default_value_t = false)]
    self_test: bool,

    /// Run CPU throughput benchmark and exit
    #[arg(long = "bench", default_value_t = false)]
    bench: bool,

    /// Number of benchmark iterations per component
    #[arg(long = "bench-iters", default_value_t = 100_000)]
    bench_iters: u32,

    /// Warmup iterations before timing
    #[arg(long = "bench-warmup", default_value_t = 1_000)]
    bench_warmup: u32,

    /// Benchmark message size in bytes (filled with 'a')
    #[arg(long = "bench-size", default_value_t = 1000)]
    bench_size: usize,

    /// Threads for the batch component (default: all cores)
    #[arg(long = "bench-threads", default_value_t = 0)]
    bench_threads: usize,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// One hashed input.
#[derive(Debug, Serialize)]
struct HashRecord {
    algorithm: String,
    input: String,
    bytes: u64,
    digest: String,
}

impl HashRecord {
    fn print(&self, json: bool) -> anyhow::Result<()> {
        if json {
            println!("{}", serde_json::to_string(self)?);
        } else {
            println!("{}  {}", self.digest, self.input);
        }
        Ok(())
    }
}

/// Where a message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Literal(String),
    File(String),
    Stdin,
}

impl Input {
    fn label(&self) -> String {
        match self {
            Self::Literal(s) => format!("\"{}\"", s),
            Self::File(path) => path.clone(),
            Self::Stdin => STDIN_LABEL.to_string(),
        }
    }
}

/// Collect inputs in command-line order: literals first, then files.
fn collect_inputs(args: &Args) -> Vec<Input> {
    let mut inputs: Vec<Input> = args.strings.iter().cloned().map(Input::Literal).collect();
    for f in &args.files {
        if f == STDIN_LABEL {
            inputs.push(Input::Stdin);
        } else {
            inputs.push(Input::File(f.clone()));
        }
    }
    if inputs.is_empty() {
        inputs.push(Input::Stdin);
    }
    inputs
}

/// Validate flag combinations. Returns a usage error message.
fn validate_args(args: &Args) -> Result<(), String> {
    if args.bench && args.bench_iters == 0 {
        return Err("--bench-iters must be at least 1".to_string());
    }
    if let Some(expected) = &args.check {
        let count = args.strings.len() + args.files.len();
        if count > 1 {
            return Err(format!(
                "--check compares a single input, got {} inputs",
                count
            ));
        }
        let bytes = decode_hex(expected.trim()).map_err(|e| format!("--check: {}", e))?;
        if bytes.len() != args.algorithm.output_size() {
            return Err(format!(
                "--check: expected {} bytes for {}, got {}",
                args.algorithm.output_size(),
                args.algorithm,
                bytes.len()
            ));
        }
    }
    Ok(())
}

/// Hash a reader incrementally. Returns (digest bytes, bytes read).
fn hash_reader<R: Read>(algorithm: Algorithm, mut reader: R) -> io::Result<(Vec<u8>, u64)> {
    match algorithm {
        Algorithm::Sha256 => {
            let mut ctx = Sha256Context::new();
            let mut buf = vec![0u8; READ_CHUNK];
            loop {
                let n = match reader.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                ctx.update(&buf[..n]);
            }
            let total = ctx.bytes_processed();
            Ok((ctx.finalize().as_bytes().to_vec(), total))
        }
    }
}

fn hash_input(algorithm: Algorithm, input: &Input) -> anyhow::Result<HashRecord> {
    let (digest, bytes) = match input {
        Input::Literal(s) => {
            let mut engine = algorithm.create();
            (engine.run(s.as_bytes())?, s.len() as u64)
        }
        Input::File(path) => {
            let file = File::open(path).with_context(|| format!("cannot open {}", path))?;
            hash_reader(algorithm, BufReader::new(file))
                .with_context(|| format!("cannot read {}", path))?
        }
        Input::Stdin => hash_reader(algorithm, io::stdin().lock()).context("cannot read stdin")?,
    };

    tracing::debug!(input = %input.label(), bytes, "hashed");

    Ok(HashRecord {
        algorithm: algorithm.to_string(),
        input: input.label(),
        bytes,
        digest: to_hex_string(&digest),
    })
}

/// Hash every input; with `--check`, compare and report. Returns the exit code.
fn run_hash(args: &Args) -> anyhow::Result<u8> {
    let inputs = collect_inputs(args);
    let mut records = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let record = hash_input(args.algorithm, input)?;
        record.print(args.json)?;
        records.push(record);
    }

    if let Some(expected) = &args.check {
        let expected = expected.trim().to_ascii_lowercase();
        let Some(record) = records.first() else {
            bail!("no input to check");
        };
        if record.digest == expected {
            eprintln!("{}: OK", record.input);
        } else {
            eprintln!("{}: FAILED (expected {})", record.input, expected);
            return Ok(1);
        }
    }
    Ok(0)
}

fn run_self_test() -> u8 {
    match self_test() {
        Ok(()) => {
            println!("self test passed");
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn run_bench_mode(args: &Args) -> anyhow::Result<()> {
    let cfg = BenchConfig {
        message_len: args.bench_size,
        iters: args.bench_iters,
        warmup: args.bench_warmup,
        threads: args.bench_threads,
        ..BenchConfig::default()
    };

    let bar = ProgressBar::new(cfg.iters as u64 * COMPONENTS as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg:<10} [{bar:40}] {pos}/{len} ({eta})")?
            .progress_chars("=> "),
    );

    let stats = run_bench_with_progress(&cfg, |component| {
        bar.set_message(component);
        bar.inc(1);
    });
    bar.finish_and_clear();

    print_bench_results(&stats?, &cfg);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = validate_args(&args) {
        eprintln!("Error: {}", err);
        return ExitCode::from(2);
    }

    if args.self_test {
        return ExitCode::from(run_self_test());
    }

    if args.bench {
        return match run_bench_mode(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Benchmark failed: {:#}", err);
                ExitCode::from(1)
            }
        };
    }

    match run_hash(&args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}
