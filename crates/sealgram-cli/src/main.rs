//! Sealgram operator binary.
//!
//! # Usage
//!
//! ```bash
//! # Mint a fresh one-time key address
//! sealgram address
//!
//! # Encrypt a message under a key address
//! sealgram encrypt --key 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed --message "hi"
//!
//! # Decrypt a payload with a recovered key (hex or decimal form)
//! sealgram decrypt --key 517215625922236215441848385968441080213542398893 --payload "v1:..."
//!
//! # Run the full send/read flow against in-process collaborators
//! sealgram demo
//! ```

#![allow(clippy::print_stdout, reason = "CLI output goes to stdout")]

use clap::{Parser, Subcommand};
use sealgram_core::{
    AccessProof, Courier, MemoryLedger, RecoveredKeyFormat, SimSealer,
};
use sealgram_crypto::{KeySeed, decrypt, derive_message_key, encrypt};
use sealgram_proto::{Address, Envelope, normalize_key_handle};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Sealgram protocol tooling
#[derive(Parser, Debug)]
#[command(name = "sealgram")]
#[command(about = "Encrypted messaging with disposable sealed keys")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mint a fresh one-time key address
    Address,

    /// Encrypt a message under a key address, printing the payload
    Encrypt {
        /// One-time key address (canonical 0x form)
        #[arg(long)]
        key: Address,

        /// Plaintext message
        #[arg(long)]
        message: String,
    },

    /// Decrypt a payload with a recovered key value
    Decrypt {
        /// Recovered key, as returned by the unsealing service (0x hex or
        /// unsigned decimal)
        #[arg(long)]
        key: String,

        /// Payload envelope ("v1:...")
        #[arg(long)]
        payload: String,
    },

    /// Run the full send/read flow against in-process collaborators
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    match args.command {
        Command::Address => {
            let seed = KeySeed::generate()?;
            println!("{}", Address::from_bytes(seed.into_bytes()));
        },
        Command::Encrypt { key, message } => {
            let seed = KeySeed::from_bytes(key.as_bytes())?;
            let derived = derive_message_key(&seed);
            let (nonce, ciphertext) = encrypt(message.as_bytes(), &derived)?;
            println!("{}", Envelope::v1(nonce, ciphertext).encode());
        },
        Command::Decrypt { key, payload } => {
            let key_address = normalize_key_handle(&key)?;
            let seed = KeySeed::from_bytes(key_address.as_bytes())?;
            let derived = derive_message_key(&seed);

            let envelope = Envelope::decode(&payload)?;
            let plaintext = decrypt(&envelope.nonce, &envelope.ciphertext, &derived)?;
            println!("{}", String::from_utf8(plaintext)?);
        },
        Command::Demo => run_demo()?,
    }

    Ok(())
}

/// Walk one message through the whole pipeline against in-process
/// collaborators, narrating each stage.
fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let sender = Address::from_bytes(KeySeed::generate()?.into_bytes());
    let recipient = Address::from_bytes(KeySeed::generate()?.into_bytes());

    // The simulated service answers in its decimal form to show the
    // normalizer absorbing the external inconsistency.
    let courier =
        Courier::new(MemoryLedger::new(), SimSealer::new(RecoveredKeyFormat::Decimal));

    tracing::info!(%sender, %recipient, "identities minted");

    let id = courier.send(sender, recipient, "hello from the demo")?;
    tracing::info!(id, "message sealed and appended");

    for (message_id, record) in courier.inbox(recipient)? {
        println!("Message   : {message_id}");
        println!("Sender    : {}", record.sender);
        println!("Recipient : {}", record.recipient);
        println!("Ciphertext: {}", record.payload);
        println!("Timestamp : {}", record.timestamp);
    }

    let proof = AccessProof::new(recipient, vec![0xA5; 64]);
    let opened = courier.read(id, &proof)?;

    println!("One-time key: {}", opened.key_address);
    println!("Plaintext   : {}", opened.plaintext);

    Ok(())
}
