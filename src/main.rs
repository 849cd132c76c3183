use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use vigenere::cli::commands::{TransformArgs, ValidateCommand};
use vigenere::cli::output::*;
use vigenere::cli::{Cli, Command};
use vigenere::core::config::{resolve_key, CipherConfig, KEY_ENV_VAR};
use vigenere::{Job, Mode, Sink, Source, Vigenere};

use std::path::Path;

const DEMO_KEY: &str = "WHYRUST";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stdout carries cipher output, so logs go to stderr
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let config_path = cli.config.as_deref();
    match &cli.command {
        Command::Encrypt(args) => run_transform(Mode::Encrypt, args, config_path).await?,
        Command::Decrypt(args) => run_transform(Mode::Decrypt, args, config_path).await?,
        Command::Validate(cmd) => validate_config(cmd, config_path)?,
        Command::Demo => run_demo()?,
    }

    Ok(())
}

async fn run_transform(mode: Mode, args: &TransformArgs, config_path: Option<&Path>) -> Result<()> {
    let config = CipherConfig::load(config_path).context("Failed to load config")?;

    let env_key = std::env::var(KEY_ENV_VAR).ok();
    let (key, key_source) = resolve_key(
        args.key.as_deref(),
        args.key_file.as_deref(),
        env_key.as_deref(),
        &config,
    )?;
    debug!("Using key from {} ({} letters)", key_source, key.len());

    let options = args.options(config.options());
    let cipher = Vigenere::with_key(key).with_options(options);

    let source = args.source();
    let sink = args.sink();
    let text_to_stdout = matches!(source, Source::Text(_)) && sink == Sink::Stdout;

    let job = Job::new(cipher, mode, source, sink).with_progress(args.progress);
    let outcome = job.run().await?;

    if args.json {
        let report = TransformReport {
            mode,
            output: outcome.output.unwrap_or_default(),
            stats: outcome.stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(path) = &args.output {
        eprintln!(
            "{} {} ({})",
            format_mode(mode),
            style(path.display()).bold(),
            format_stats(&outcome.stats)
        );
    } else if text_to_stdout {
        // Inline text has no trailing newline of its own
        println!();
    }

    Ok(())
}

fn validate_config(cmd: &ValidateCommand, config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .or_else(|| CipherConfig::default_path().filter(|path| path.exists()));

    let Some(path) = path else {
        println!("{} No config file found; defaults apply", INFO);
        return Ok(());
    };

    println!("{} Validating {}...", INFO, style(path.display()).bold());

    let result = CipherConfig::from_file(&path).and_then(|config| {
        let key = config.key()?;
        Ok((config, key))
    });

    match result {
        Ok((config, key)) => {
            println!("{} Configuration is valid!", CHECK);
            match &key {
                Some((key, source)) => println!(
                    "  Key: {} letters from {}",
                    style(key.len()).cyan(),
                    style(source).bold()
                ),
                None => println!("  Key: {}", style("not set").dim()),
            }
            println!("  Options: {}", format_options(&config.options()));

            if cmd.json {
                let report = ConfigReport {
                    path: Some(path.display().to_string()),
                    key_length: key.as_ref().map(|(key, _)| key.len()),
                    key_source: key.map(|(_, source)| source),
                    options: config.options(),
                };
                println!("\n{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(format!("{:#}", e)).red());
            std::process::exit(1);
        }
    }
}

fn run_demo() -> Result<()> {
    let cipher = Vigenere::new(DEMO_KEY)?;

    let plain_text = "TO EMPOWER EVERYONE";
    let cipher_text = cipher.encrypt(plain_text);
    println!("{}", format_demo_line(Mode::Encrypt, plain_text, DEMO_KEY, &cipher_text));

    let cipher_text = "PV CDJGPAY CMYJRKUC";
    let plain_text = cipher.decrypt(cipher_text);
    println!("{}", format_demo_line(Mode::Decrypt, cipher_text, DEMO_KEY, &plain_text));

    Ok(())
}
