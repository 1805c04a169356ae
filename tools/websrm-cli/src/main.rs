//! WEB-SRM Command Line Tool
//!
//! Provides commands for working with transaction payloads and signatures:
//! - canonicalize: Generate canonical JSON representation
//! - hash: Compute SHA256 hash of canonical JSON
//! - sign: Compute the chained signature record for a payload
//! - verify: Verify an 88-character signature against a payload
//! - fingerprint: Compute the SHA-1 fingerprint of a certificate
//! - qr: Build the receipt verification URL

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use websrm_canonical::{hash_canonical, to_canonical_json, to_canonical_json_string};
use websrm_chain::compute_body_signatures;
use websrm_crypto::{certificate_fingerprint, verify};
use websrm_transport::{build_official_qr, QrOptions};

#[derive(Parser)]
#[command(name = "websrm")]
#[command(version)]
#[command(about = "WEB-SRM Command Line Tool - Canonicalize, hash, sign, and verify transaction payloads")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonicalize a JSON file
    #[command(about = "Output canonical JSON representation")]
    Canonicalize {
        /// Path to the JSON file to canonicalize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Compute SHA256 hash of canonical JSON
    #[command(about = "Compute SHA256 hash of canonical JSON")]
    Hash {
        /// Path to the JSON file to hash
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Sign a transaction payload
    #[command(about = "Compute the chained signature record for a payload")]
    Sign {
        /// Path to the payload JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Path to the ECDSA P-256 private key (PEM)
        #[arg(long, short, value_name = "KEY")]
        key: PathBuf,

        /// Previous transaction's signature (88 Base64 characters)
        #[arg(long, short, value_name = "SIG")]
        previous: Option<String>,
    },

    /// Verify a payload signature
    #[command(about = "Verify an 88-character signature against a payload")]
    Verify {
        /// Path to the payload JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// The signature to check (88 Base64 characters)
        #[arg(long, short, value_name = "SIG")]
        signature: String,

        /// Path to the ECDSA P-256 public key (PEM)
        #[arg(long, short, value_name = "KEY")]
        key: PathBuf,
    },

    /// Fingerprint a certificate
    #[command(about = "Compute the SHA-1 fingerprint of a PEM certificate")]
    Fingerprint {
        /// Path to the certificate (PEM)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Build a receipt verification URL
    #[command(about = "Build the QR verification URL for a signed payload")]
    Qr {
        /// Path to the signed payload JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// The transaction's chain signature (88 Base64 characters)
        #[arg(long, short, value_name = "SIG")]
        signature: String,

        /// Verification service base URL
        #[arg(long, short, value_name = "URL")]
        base_url: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Canonicalize { file } => handle_canonicalize(&file),
        Commands::Hash { file } => handle_hash(&file),
        Commands::Sign {
            file,
            key,
            previous,
        } => handle_sign(&file, &key, previous.as_deref()),
        Commands::Verify {
            file,
            signature,
            key,
        } => handle_verify(&file, &signature, &key),
        Commands::Fingerprint { file } => handle_fingerprint(&file),
        Commands::Qr {
            file,
            signature,
            base_url,
        } => handle_qr(&file, &signature, &base_url),
    }
}

fn read_json(file: &PathBuf) -> Result<serde_json::Value> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {} as JSON", file.display()))
}

fn handle_canonicalize(file: &PathBuf) -> Result<()> {
    let value = read_json(file)?;
    let canonical =
        to_canonical_json(&value).with_context(|| "Failed to generate canonical JSON")?;

    std::io::stdout()
        .write_all(&canonical)
        .with_context(|| "Failed to write output")?;

    Ok(())
}

fn handle_hash(file: &PathBuf) -> Result<()> {
    let value = read_json(file)?;
    let hash = hash_canonical(&value).with_context(|| "Failed to compute hash")?;

    println!("{}", hash);

    Ok(())
}

fn handle_sign(file: &PathBuf, key: &PathBuf, previous: Option<&str>) -> Result<()> {
    let payload = read_json(file)?;
    let private_pem = std::fs::read_to_string(key)
        .with_context(|| format!("Failed to read key: {}", key.display()))?;

    let link = compute_body_signatures(&payload, &private_pem, previous)
        .with_context(|| "Failed to compute signatures")?;

    println!("preced: {}", link.preced);
    println!("actu: {}", link.actu);
    println!("sha256: {}", link.sha256_hex);

    Ok(())
}

fn handle_verify(file: &PathBuf, signature: &str, key: &PathBuf) -> Result<()> {
    let payload = read_json(file)?;
    let public_pem = std::fs::read_to_string(key)
        .with_context(|| format!("Failed to read key: {}", key.display()))?;

    let canonical = to_canonical_json_string(&payload)
        .with_context(|| "Failed to generate canonical JSON")?;
    let valid =
        verify(&canonical, signature, &public_pem).with_context(|| "Failed to verify signature")?;

    if valid {
        println!("Signature valid");
        Ok(())
    } else {
        anyhow::bail!("Signature INVALID");
    }
}

fn handle_fingerprint(file: &PathBuf) -> Result<()> {
    let cert_pem = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read certificate: {}", file.display()))?;

    let fingerprint =
        certificate_fingerprint(&cert_pem).with_context(|| "Failed to compute fingerprint")?;

    println!("{}", fingerprint);

    Ok(())
}

fn handle_qr(file: &PathBuf, signature: &str, base_url: &str) -> Result<()> {
    let payload = read_json(file)?;
    let options = QrOptions::new(base_url);

    let url = build_official_qr(&payload, signature, &options)
        .with_context(|| "Failed to build QR URL")?;

    println!("{}", url);

    Ok(())
}
