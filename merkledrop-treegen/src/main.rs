//! Merkledrop genesis-tree builder.
//!
//! Builds the genesis Merkle tree over a recipient list and emits the root
//! and per-recipient membership proofs. The tree uses the same leaf rule
//! (`sha256(address)`) and sorted-pair combine as the on-line verifier, so
//! proofs produced here verify against a distribution configured with the
//! emitted root.
//!
//! # Usage
//!
//! ```bash
//! # Emit the root and every proof as a JSON bundle
//! merkledrop-treegen build --input recipients.json --output bundle.json
//!
//! # Same bundle in the deterministic binary encoding
//! merkledrop-treegen build --input recipients.json --output bundle.bin --binary
//!
//! # Print only the genesis root
//! merkledrop-treegen root --input recipients.json
//!
//! # Print one recipient's proof
//! merkledrop-treegen prove --input recipients.json --address <hex>
//!
//! # Check a proof file offline against a root
//! merkledrop-treegen verify --root <hex> --proof proof.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use merkledrop_core::{
    address_from_hex, address_to_hex, digest_from_hex, digest_to_hex, leaf_hash, serialization,
    verify_proof, Address, Digest, MerkleTree,
};

/// Merkledrop genesis-tree builder.
#[derive(Parser)]
#[command(name = "merkledrop-treegen")]
#[command(about = "Build the genesis Merkle tree and membership proofs for a distribution")]
#[command(version)]
struct Cli {
    /// Log level when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tree and write the full proof bundle.
    Build {
        /// Recipient list: a JSON array of hex addresses.
        #[arg(long)]
        input: PathBuf,

        /// Output path for the proof bundle.
        #[arg(long)]
        output: PathBuf,

        /// Write the deterministic binary encoding instead of JSON.
        #[arg(long)]
        binary: bool,
    },

    /// Print the genesis root for a recipient list.
    Root {
        /// Recipient list: a JSON array of hex addresses.
        #[arg(long)]
        input: PathBuf,
    },

    /// Print a single recipient's proof.
    Prove {
        /// Recipient list: a JSON array of hex addresses.
        #[arg(long)]
        input: PathBuf,

        /// Hex address of the recipient to prove.
        #[arg(long)]
        address: String,
    },

    /// Verify a proof file against a root, offline.
    Verify {
        /// Hex genesis root.
        #[arg(long)]
        root: String,

        /// Proof file as emitted by `prove`.
        #[arg(long)]
        proof: PathBuf,
    },
}

/// One recipient's entry in the JSON bundle.
#[derive(Debug, Serialize, Deserialize)]
struct ProofEntry {
    /// Hex recipient address.
    address: String,
    /// Hex sibling digests, leaf level first.
    proof: Vec<String>,
}

/// The full JSON proof bundle.
#[derive(Debug, Serialize, Deserialize)]
struct ProofBundle {
    /// Hex genesis root.
    root: String,
    /// Number of committed recipients.
    recipient_count: u64,
    /// One entry per recipient, in input order.
    proofs: Vec<ProofEntry>,
}

/// Binary bundle record, encoded with the deterministic serializer.
#[derive(Debug, Serialize, Deserialize)]
struct BinaryBundle {
    root: Digest,
    proofs: Vec<(Address, Vec<Digest>)>,
}

/// Parse the recipient list file: a JSON array of hex addresses.
fn read_recipients(path: &Path) -> anyhow::Result<Vec<Address>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read recipient list {}", path.display()))?;
    let entries: Vec<String> =
        serde_json::from_str(&raw).context("recipient list must be a JSON array of hex strings")?;

    if entries.is_empty() {
        bail!("recipient list is empty");
    }

    let mut recipients = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let address = address_from_hex(entry)
            .with_context(|| format!("bad address at index {}: {}", i, entry))?;
        recipients.push(address);
    }

    Ok(recipients)
}

/// Build the tree over a recipient list.
///
/// Duplicate addresses are rejected: with equal fixed allocations a
/// duplicate leaf would alias a single claim slot.
fn build_tree(recipients: &[Address]) -> anyhow::Result<MerkleTree> {
    let tree = MerkleTree::from_recipients(recipients)
        .context("failed to build genesis tree (duplicate recipient?)")?;

    tracing::info!(
        recipients = recipients.len(),
        root = %digest_to_hex(&tree.root()),
        "built genesis tree"
    );

    Ok(tree)
}

/// Assemble the JSON bundle for a built tree.
fn make_bundle(tree: &MerkleTree, recipients: &[Address]) -> anyhow::Result<ProofBundle> {
    let mut proofs = Vec::with_capacity(recipients.len());
    for (i, address) in recipients.iter().enumerate() {
        let proof = tree.proof(i)?;
        proofs.push(ProofEntry {
            address: address_to_hex(address),
            proof: proof.iter().map(digest_to_hex).collect(),
        });
    }

    Ok(ProofBundle {
        root: digest_to_hex(&tree.root()),
        recipient_count: recipients.len() as u64,
        proofs,
    })
}

/// Assemble the deterministic binary bundle for a built tree.
fn make_binary_bundle(tree: &MerkleTree, recipients: &[Address]) -> anyhow::Result<BinaryBundle> {
    let mut proofs = Vec::with_capacity(recipients.len());
    for (i, address) in recipients.iter().enumerate() {
        proofs.push((*address, tree.proof(i)?));
    }

    Ok(BinaryBundle {
        root: tree.root(),
        proofs,
    })
}

fn cmd_build(input: &Path, output: &Path, binary: bool) -> anyhow::Result<()> {
    let recipients = read_recipients(input)?;
    let tree = build_tree(&recipients)?;

    if binary {
        let bundle = make_binary_bundle(&tree, &recipients)?;
        let bytes = serialization::serialize(&bundle)?;
        fs::write(output, bytes)
            .with_context(|| format!("failed to write {}", output.display()))?;
    } else {
        let bundle = make_bundle(&tree, &recipients)?;
        let json = serde_json::to_string_pretty(&bundle)?;
        fs::write(output, json)
            .with_context(|| format!("failed to write {}", output.display()))?;
    }

    tracing::info!(output = %output.display(), "wrote proof bundle");
    println!("{}", digest_to_hex(&tree.root()));

    Ok(())
}

fn cmd_root(input: &Path) -> anyhow::Result<()> {
    let recipients = read_recipients(input)?;
    let tree = build_tree(&recipients)?;
    println!("{}", digest_to_hex(&tree.root()));
    Ok(())
}

fn cmd_prove(input: &Path, address: &str) -> anyhow::Result<()> {
    let recipients = read_recipients(input)?;
    let target = address_from_hex(address).context("bad --address")?;

    let index = match recipients.iter().position(|r| *r == target) {
        Some(index) => index,
        None => bail!("address {} is not in the recipient list", address),
    };

    let tree = build_tree(&recipients)?;
    let proof = tree.proof(index)?;

    let entry = ProofEntry {
        address: address_to_hex(&target),
        proof: proof.iter().map(digest_to_hex).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&entry)?);

    Ok(())
}

fn cmd_verify(root: &str, proof_path: &Path) -> anyhow::Result<()> {
    let root = digest_from_hex(root).context("bad --root")?;

    let raw = fs::read_to_string(proof_path)
        .with_context(|| format!("failed to read proof file {}", proof_path.display()))?;
    let entry: ProofEntry = serde_json::from_str(&raw).context("malformed proof file")?;

    let address = address_from_hex(&entry.address).context("bad address in proof file")?;
    let mut proof = Vec::with_capacity(entry.proof.len());
    for digest in &entry.proof {
        proof.push(digest_from_hex(digest).context("bad digest in proof file")?);
    }

    if verify_proof(&proof, &root, &leaf_hash(&address)) {
        println!("OK");
        Ok(())
    } else {
        bail!("proof does not verify against root {}", digest_to_hex(&root));
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Build { input, output, binary } => cmd_build(input, output, *binary),
        Commands::Root { input } => cmd_root(input),
        Commands::Prove { input, address } => cmd_prove(input, address),
        Commands::Verify { root, proof } => cmd_verify(root, proof),
    }
}
