//! `mailguess` — generate, export and verify likely email addresses.
//!
//! # Usage
//!
//! ```
//! mailguess generate --first Mike --last Smith --domain acme.com
//! mailguess generate --first Mike --last Smith --domain acme.com --csv --check-mx
//! mailguess generate --first Mike --last Smith --domain acme.com --verify --url http://localhost:8080
//! mailguess verify mike.smith@acme.com
//! mailguess mx acme.com
//! ```

mod client;
mod mx;
mod output;
mod settings;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args as ClapArgs, Parser, Subcommand};
use client::ApiClient;
use mailguess_core::{
  CandidateSet,
  board::Board,
  expand,
  export::{export_file_name, to_csv},
  input::{NameInput, check_mx_domain},
  queue::VerifyQueue,
  verify::{VerificationStatus, verify_one_with_raw},
};
use mailguess_provider::MxChecker;
use mx::MxReport;
use settings::{ConfigFile, Settings};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "mailguess", version, about = "Guess and verify email addresses for a name")]
struct Args {
  /// Path to a TOML config file (url, dns_resolver).
  #[arg(short, long, value_name = "FILE", global = true)]
  config: Option<PathBuf>,

  /// Base URL of the mailguess server (default: http://localhost:8080).
  #[arg(long, env = "MAILGUESS_URL", global = true)]
  url: Option<String>,

  /// DNS-over-HTTPS JSON endpoint used for MX checks.
  #[arg(long, env = "MAILGUESS_DNS_RESOLVER", global = true)]
  dns_resolver: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List every address pattern for a name.
  Generate(GenerateArgs),
  /// Verify a single address through the server.
  Verify {
    email: String,
  },
  /// Check whether a domain publishes mail exchangers.
  Mx {
    domain: String,
  },
}

#[derive(ClapArgs, Debug)]
struct GenerateArgs {
  #[arg(long, default_value = "")]
  first:    String,
  #[arg(long, default_value = "")]
  middle:   String,
  #[arg(long, default_value = "")]
  last:     String,
  #[arg(long, default_value = "")]
  domain:   String,
  /// Write the list as CSV, to PATH or to `email_patterns_<millis>.csv`.
  #[arg(long, value_name = "PATH", num_args = 0..=1)]
  csv:      Option<Option<PathBuf>>,
  /// Look up the domain's MX records before listing.
  #[arg(long)]
  check_mx: bool,
  /// Verify every address, one at a time, and print each result.
  #[arg(long)]
  verify:   bool,
  /// Print addresses only, one per line.
  #[arg(long)]
  plain:    bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::read(path)?,
    None => ConfigFile::default(),
  };
  let settings = Settings::resolve(args.url, args.dns_resolver, &file_cfg);

  match args.command {
    Command::Generate(gen_args) => generate(gen_args, &settings).await,
    Command::Verify { email } => verify(&email, &settings).await,
    Command::Mx { domain } => mx(&domain, &settings).await,
  }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

async fn generate(args: GenerateArgs, settings: &Settings) -> Result<()> {
  let input = NameInput {
    first:  args.first,
    middle: args.middle,
    last:   args.last,
    domain: args.domain,
  };
  let name = input.validate()?;

  if args.check_mx {
    warn_without_mail_servers(&name.domain, settings).await;
  }

  let set = expand(&name);
  if args.plain {
    for email in set.emails() {
      println!("{email}");
    }
  } else {
    for candidate in &set {
      println!("{}", output::candidate_line(candidate));
    }
    println!("{}", output::variations_found(set.len()));
  }

  if let Some(path) = args.csv {
    let path = path.unwrap_or_else(|| PathBuf::from(export_file_name(Utc::now())));
    std::fs::write(&path, to_csv(&set))
      .with_context(|| format!("writing {}", path.display()))?;
    eprintln!("Saved {} addresses to {}", set.len(), path.display());
  }

  if args.verify {
    verify_all(set, settings).await?;
  }
  Ok(())
}

/// The MX check is advisory: failures are reported and generation goes on.
async fn warn_without_mail_servers(domain: &str, settings: &Settings) {
  let domain = match check_mx_domain(domain) {
    Ok(d) => d,
    Err(e) => {
      eprintln!("warning: skipping MX check: {e}");
      return;
    }
  };
  let checker = match MxChecker::new(settings.dns_resolver.as_str()) {
    Ok(c) => c,
    Err(e) => {
      eprintln!("{}", output::dns_check_failed(&domain, &e.to_string()));
      return;
    }
  };
  if let Some(warning) = mx::lookup(&checker, &domain).await.warning(&domain) {
    eprintln!("{warning}");
  }
}

async fn verify_all(set: CandidateSet, settings: &Settings) -> Result<()> {
  let client = ApiClient::new(&settings.url)?;
  let mut queue = VerifyQueue::spawn(client);
  let mut board = Board::new(set);

  eprintln!("Verifying {} addresses via {}", board.len(), settings.url);
  board
    .verify_all(&mut queue, |entry| {
      if entry.status.is_resolved() {
        println!("{}", output::status_line(entry));
      }
    })
    .await?;
  queue.shutdown().await;

  let counts: Vec<_> = [
    VerificationStatus::Valid,
    VerificationStatus::Risky,
    VerificationStatus::Invalid,
    VerificationStatus::Error,
  ]
  .into_iter()
  .map(|status| (status, board.count(status)))
  .collect();
  println!("{}", output::tally(&counts));
  Ok(())
}

/// Failures print as an `error` status, the same as in bulk verification.
async fn verify(email: &str, settings: &Settings) -> Result<()> {
  let client = ApiClient::new(&settings.url)?;
  let (status, raw) = verify_one_with_raw(&client, email).await;
  println!("{}", output::verification_line(email, status, raw.as_deref()));
  Ok(())
}

/// Only an invalid domain is an error; lookup outcomes are reported.
async fn mx(domain: &str, settings: &Settings) -> Result<()> {
  let domain = check_mx_domain(domain)?;
  let checker = MxChecker::new(settings.dns_resolver.as_str())?;
  match mx::lookup(&checker, &domain).await {
    MxReport::Active(exchangers) => {
      println!("{domain}: {} mail exchangers", exchangers.len());
      for exchanger in exchangers {
        println!("  {exchanger}");
      }
    }
    report => {
      if let Some(warning) = report.warning(&domain) {
        eprintln!("{warning}");
      }
    }
  }
  Ok(())
}
