use std::fmt::Display;
use std::path::PathBuf;
use std::time::Instant;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::Level;

use tstat::batch::{load_batch, run_batch};
use tstat::curve::{DensityCurve, density_curve};
use tstat::engine::{Summary, TTestResult, Tail, TestConfig, TestType, run_t_test, run_t_test_from_summary};
use tstat::input::parse_sample;
use tstat::report;

#[derive(Parser)]
#[command(name = "tstat", about = "Student's t-tests with a self-contained t-distribution")]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a t-test on raw samples
    Test {
        #[arg(long = "type", value_enum, default_value_t = TestType::OneSample)]
        test_type: TestType,

        #[arg(long, value_enum, default_value_t = Tail::TwoTailed)]
        tail: Tail,

        /// Significance level
        #[arg(long, default_value_t = 0.05)]
        alpha: f64,

        /// Hypothesized population mean (one-sample test)
        #[arg(long = "mu0", default_value_t = 0.0, allow_negative_numbers = true)]
        hypothesized_mean: f64,

        /// Sample values, comma separated (group 1 / before)
        #[arg(long, allow_hyphen_values = true)]
        sample1: String,

        /// Second sample, comma separated (group 2 / after)
        #[arg(long, allow_hyphen_values = true)]
        sample2: Option<String>,

        /// Also print the density curve (nested under "curve" with --json)
        #[arg(long)]
        curve: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a t-test from summary statistics
    ///
    /// Two-sample and paired tests need --mean2/--sd2/--n2. For a paired test the
    /// first summary describes the differences; the second is checked but unused.
    Summary {
        #[arg(long = "type", value_enum, default_value_t = TestType::OneSample)]
        test_type: TestType,

        #[arg(long, value_enum, default_value_t = Tail::TwoTailed)]
        tail: Tail,

        #[arg(long, default_value_t = 0.05)]
        alpha: f64,

        #[arg(long = "mu0", default_value_t = 0.0, allow_negative_numbers = true)]
        hypothesized_mean: f64,

        #[arg(long, allow_negative_numbers = true)]
        mean1: f64,

        #[arg(long)]
        sd1: f64,

        #[arg(long)]
        n1: usize,

        #[arg(long, allow_negative_numbers = true)]
        mean2: Option<f64>,

        #[arg(long)]
        sd2: Option<f64>,

        #[arg(long)]
        n2: Option<usize>,

        #[arg(long)]
        curve: bool,

        #[arg(long)]
        json: bool,
    },

    /// Run every test described in a TOML batch file
    Batch {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Print the t density over a grid, marking the rejection region
    Curve {
        /// Degrees of freedom
        #[arg(long)]
        df: f64,

        /// Test statistic to mark
        #[arg(long, allow_negative_numbers = true)]
        t: Option<f64>,

        /// Critical value(s), comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        critical: Vec<f64>,

        #[arg(long, value_enum, default_value_t = Tail::TwoTailed)]
        tail: Tail,

        #[arg(long)]
        json: bool,
    },

    /// P(T <= t) for the t-distribution
    Cdf {
        #[arg(allow_negative_numbers = true)]
        t: f64,

        #[arg(long)]
        df: f64,
    },

    /// Inverse CDF of the t-distribution
    Quantile {
        p: f64,

        #[arg(long)]
        df: f64,
    },

    /// Generate shell completions
    Completions { shell: Shell },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let start = Instant::now();

    match cli.command {
        Commands::Test {
            test_type,
            tail,
            alpha,
            hypothesized_mean,
            sample1,
            sample2,
            curve,
            json,
        } => {
            let config = TestConfig::new(test_type, tail, alpha).with_hypothesized_mean(hypothesized_mean);
            let sample1 = parse_sample(&sample1, "Sample 1").unwrap_or_else(|e| fail(e));
            let sample2 = match (test_type, sample2) {
                (TestType::OneSample, _) => None,
                (_, Some(text)) => Some(parse_sample(&text, "Sample 2").unwrap_or_else(|e| fail(e))),
                (_, None) => fail(format!("--sample2 is required for a {test_type} test")),
            };
            tracing::debug!(n1 = sample1.len(), n2 = sample2.as_ref().map(Vec::len), "parsed samples");

            let result = run_t_test(&sample1, sample2.as_deref(), &config).unwrap_or_else(|e| fail(e));
            emit_result(&result, &config, curve, json);
        }

        Commands::Summary {
            test_type,
            tail,
            alpha,
            hypothesized_mean,
            mean1,
            sd1,
            n1,
            mean2,
            sd2,
            n2,
            curve,
            json,
        } => {
            let config = TestConfig::new(test_type, tail, alpha).with_hypothesized_mean(hypothesized_mean);
            let summary1 = Summary::new(mean1, sd1, n1);
            let summary2 = match (mean2, sd2, n2) {
                (Some(mean), Some(sd), Some(size)) => Some(Summary::new(mean, sd, size)),
                (None, None, None) => None,
                _ => fail("--mean2, --sd2 and --n2 must be given together"),
            };

            let result = run_t_test_from_summary(&summary1, &config, summary2.as_ref())
                .unwrap_or_else(|e| fail(e));
            emit_result(&result, &config, curve, json);
        }

        Commands::Batch { file, json } => {
            let batch = load_batch(&file).unwrap_or_else(|e| fail(e));
            let outcomes = run_batch(&batch);
            if json {
                report::print_batch_json(&outcomes);
            } else {
                report::print_batch(&outcomes);
            }

            let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
            tracing::info!(
                tests = outcomes.len(),
                failed,
                "completed in {:.1}ms",
                start.elapsed().as_secs_f64() * 1000.0
            );
            if failed > 0 {
                std::process::exit(1);
            }
        }

        Commands::Curve {
            df,
            t,
            critical,
            tail,
            json,
        } => {
            if !(df > 0.0) {
                fail(format!("degrees of freedom must be positive, got {df}"));
            }
            emit_curve(&density_curve(df, t, &critical, tail), json);
        }

        Commands::Cdf { t, df } => {
            println!("{}", tstat::t_cdf(t, df));
        }

        Commands::Quantile { p, df } => {
            let q = tstat::t_quantile(p, df).unwrap_or_else(|e| fail(e));
            println!("{q}");
        }

        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tstat", &mut std::io::stdout());
        }
    }

    tracing::debug!("finished in {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

fn emit_result(result: &TTestResult, config: &TestConfig, with_curve: bool, json: bool) {
    let curve = with_curve.then(|| DensityCurve::for_result(result, config.tail));
    if json {
        report::print_result_json(result, config, curve.as_ref());
    } else {
        report::print_result(result, config);
        if let Some(curve) = &curve {
            println!();
            report::print_curve(curve);
        }
    }
}

fn emit_curve(curve: &DensityCurve, json: bool) {
    if json {
        report::print_curve_json(curve);
    } else {
        println!();
        report::print_curve(curve);
    }
}

fn fail(err: impl Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
