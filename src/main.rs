use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
mod auth;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use zucrypt::crypto::{self, MIN_OUTPUT_LEN};
use zucrypt::{
    Argon2Hasher, Argon2Status, HashParameters, Mode, ResolvedParams, ValidationStatus, config,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Argon2d
    D,
    /// Argon2i
    I,
    /// Argon2id
    Id,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::D => Mode::Argon2d,
            ModeArg::I => Mode::Argon2i,
            ModeArg::Id => Mode::Argon2id,
        }
    }
}

#[derive(Debug, clap::Args)]
struct Argon2Args {
    /// Argon2 memory cost in KiB (minimum: 65536)
    #[arg(long = "argon-mem")]
    memory_cost: Option<u32>,

    /// Argon2 time cost / iterations (minimum: 3)
    #[arg(long = "argon-time")]
    time_cost: Option<u32>,

    /// Argon2 parallelism (minimum: 1)
    #[arg(long = "argon-parallelism")]
    parallelism: Option<u32>,
}

impl Argon2Args {
    /// Flags win over the file; gaps are filled with the minimal defaults.
    ///
    /// Returns `None` when neither source names a parameter.
    fn to_hash_params(&self, file: Option<HashParameters>) -> Option<HashParameters> {
        let flags = HashParameters {
            time_cost: self.time_cost,
            memory_cost: self.memory_cost,
            parallelism: self.parallelism,
        };
        let merged = flags.or(file.unwrap_or_default());

        if merged.is_empty() {
            None
        } else {
            Some(merged.or(ResolvedParams::default().into()))
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "zucrypt")]
#[command(
    version,
    about = "Argon2 password hashing with enforced minimal security settings."
)]
struct Cli {
    /// JSON file with time_cost, memory_cost and parallelism
    #[arg(long, global = true, value_name = "PATH", env = "ZUCRYPT_PARAMS")]
    params_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password and prints the encoded digest
    Hash {
        /// Argon2 variant
        #[arg(long, value_enum, default_value_t = ModeArg::Id)]
        mode: ModeArg,

        /// Salt (at least 16 bytes); random when omitted
        #[arg(long)]
        salt: Option<String>,

        /// Digest size in bytes
        #[arg(long, default_value_t = 32)]
        size: usize,

        #[command(flatten)]
        argon2: Argon2Args,
    },

    /// Verifies a password against an encoded digest
    #[command(arg_required_else_help = true)]
    Verify {
        /// Argon2 variant the digest was computed with
        #[arg(long, value_enum, default_value_t = ModeArg::Id)]
        mode: ModeArg,

        /// Encoded digest as printed by `hash`
        digest: String,
    },

    /// Shows how parameters are validated and resolved
    Check {
        #[command(flatten)]
        argon2: Argon2Args,
    },
}

/// Initialize tracing subscriber based on verbosity
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Hash {
            mode,
            salt,
            size,
            argon2,
        } => {
            let file = config::resolve_params(args.params_file.as_deref())?;
            let params = argon2.to_hash_params(file);
            let salt = match salt {
                Some(s) => s.into_bytes(),
                None => crypto::generate_salt()?.to_vec(),
            };
            let password = auth::read_password(true)?;

            let hasher = Argon2Hasher::new();
            let digest = hasher
                .hash(password.as_bytes(), &salt, mode.into(), size, params.as_ref())
                .context("failed to hash password")?;
            hasher.close();

            println!("{digest}");
        }
        Commands::Verify { mode, digest } => {
            let password = auth::read_password(false)?;

            let hasher = Argon2Hasher::new();
            let status = hasher.verify(&digest, password.as_bytes(), mode.into())?;
            hasher.close();

            println!("{status}");
            if status != Argon2Status::Ok {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Check { argon2 } => {
            let file = config::resolve_params(args.params_file.as_deref())?;
            let params = argon2.to_hash_params(file);
            let resolution = crypto::resolve(params.as_ref());

            println!("{:<11}  {:<18}  Effective", "Parameter", "Status");
            println!("{:-<11}  {:-<18}  {:-<9}", "", "", "");

            for outcome in resolution.outcomes {
                let effective = match outcome.status {
                    ValidationStatus::NotMinimalSecure => "-".to_string(),
                    _ => resolution.params.get(outcome.parameter_name).to_string(),
                };
                println!(
                    "{:<11}  {:<18}  {effective}",
                    outcome.parameter_name.as_str(),
                    outcome.status.as_str(),
                );
            }
            println!("min output size: {MIN_OUTPUT_LEN}");

            if !resolution.is_secure() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
