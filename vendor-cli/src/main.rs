//! Vendor CLI
//!
//! Command-line interface for the vendor panel API, plus the currency
//! formatting helpers the panel uses to display amounts.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currency_format::{AmountFormatter, Locale, table};
use vendor_client::{UploadFile, VendorClient};
use vendor_types::{
    AuthResponse, Conversation, MessageDraft, SupportMessage, ThreadId, UploadPrefix,
    VendorRegistration,
};

const DEFAULT_TICKET_MESSAGE: &str = "Iniciando chat de soporte";
const NO_THREADS_HINT: &str = "No support threads yet. Open one with `vendor support open`.";

#[derive(Parser)]
#[command(name = "vendor")]
#[command(author, version, about = "Vendor panel CLI client", long_about = None)]
struct Cli {
    /// Base URL of the marketplace backend
    #[arg(
        long,
        global = true,
        env = "VENDOR_API_URL",
        default_value = "http://localhost:9000"
    )]
    api_url: String,

    /// Publishable API key sent with every request
    #[arg(long, global = true, env = "VENDOR_PUBLISHABLE_KEY")]
    publishable_key: Option<String>,

    /// Session token from `vendor auth login`
    #[arg(long, global = true, env = "VENDOR_TOKEN")]
    token: Option<String>,

    /// Locale used for amount formatting (defaults to LC_ALL / LC_MONETARY / LANG)
    #[arg(long, global = true, env = "VENDOR_LOCALE")]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Currency formatting helpers
    Money {
        #[command(subcommand)]
        action: MoneyCommands,
    },
    /// Seller authentication
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Register a new vendor with identity documents
    Register {
        /// JSON file with the registration form values
        #[arg(long)]
        form: PathBuf,
        /// Picture of the identity card
        #[arg(long)]
        ci: PathBuf,
        /// Picture of the tax-id document
        #[arg(long)]
        tax_id: Option<PathBuf>,
    },
    /// Upload a file through a presigned URL
    Upload {
        path: PathBuf,
        /// Storage folder (kyc, products)
        #[arg(long, default_value = "products")]
        prefix: UploadPrefix,
    },
    /// Support-ticket messaging
    Support {
        #[command(subcommand)]
        action: SupportCommands,
    },
}

#[derive(Subcommand)]
enum MoneyCommands {
    /// Fraction digits displayed for a currency
    Digits { code: String },
    /// Narrow currency symbol
    Symbol { code: String },
    /// Amount in the locale's currency format
    Locale {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        code: String,
    },
    /// Amount as "symbol amount CODE"
    Stylized {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        code: String,
    },
    /// Whether an amount rounds to zero at the currency's precision
    Rounding {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        code: String,
    },
    /// List known currencies
    Currencies,
}

#[derive(Subcommand)]
enum AuthCommands {
    /// Log in and print the session token
    Login {
        email: String,
        #[arg(long, env = "VENDOR_PASSWORD")]
        password: String,
    },
    /// Register an identity and create the seller (legacy route)
    SignUp {
        email: String,
        #[arg(long, env = "VENDOR_PASSWORD")]
        password: String,
        /// Store name
        #[arg(long)]
        name: String,
    },
    /// End the current session
    Logout,
    /// Send a password reset email
    ResetPassword { email: String },
    /// Set a new password with the token from the reset email
    UpdatePassword {
        #[arg(long)]
        reset_token: String,
        #[arg(long, env = "VENDOR_PASSWORD")]
        password: String,
    },
}

#[derive(Subcommand)]
enum SupportCommands {
    /// List support threads
    Threads,
    /// Show the messages of a thread (the active one by default)
    Messages { thread: Option<String> },
    /// Open a new support ticket
    Open {
        #[arg(default_value = DEFAULT_TICKET_MESSAGE)]
        body: String,
    },
    /// Send a message to the active thread
    Send { body: String },
    /// Poll the active thread and print new messages
    Watch {
        /// Seconds between polls
        #[arg(long, default_value_t = 5)]
        interval: u64,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,vendor_cli=info,vendor_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn formatter(locale: Option<&str>) -> AmountFormatter {
    match locale {
        Some(tag) => {
            let locale = Locale::parse(tag).unwrap_or_else(|| {
                tracing::warn!(tag, "Unknown locale, using {}", Locale::EN_US);
                Locale::EN_US
            });
            AmountFormatter::new(locale)
        }
        None => AmountFormatter::current(),
    }
}

fn print_message(message: &SupportMessage) {
    let author = if message.is_from_seller() { "you" } else { "admin" };
    println!(
        "[{}] {}: {}",
        message.created_at.format("%Y-%m-%d %H:%M:%S"),
        author,
        message.body
    );
}

fn print_conversation(conversation: &Conversation) {
    println!(
        "Thread {} ({})",
        conversation.thread.id, conversation.thread.status
    );
    for message in &conversation.messages {
        print_message(message);
    }
    if !conversation.thread.accepts_messages() {
        println!("(closed: no new messages accepted)");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut client = VendorClient::new(&cli.api_url);
    if let Some(key) = cli.publishable_key {
        client = client.with_publishable_key(key);
    }
    if let Some(token) = cli.token {
        client = client.with_token(token);
    }

    match cli.command {
        Commands::Money { action } => {
            let formatter = formatter(cli.locale.as_deref());
            match action {
                MoneyCommands::Digits { code } => println!("{}", formatter.decimal_digits(&code)),
                MoneyCommands::Symbol { code } => println!("{}", formatter.native_symbol(&code)),
                MoneyCommands::Locale { amount, code } => {
                    println!("{}", formatter.locale_amount(amount, &code))
                }
                MoneyCommands::Stylized { amount, code } => {
                    println!("{}", formatter.stylized_amount(amount, &code))
                }
                MoneyCommands::Rounding { amount, code } => println!(
                    "{}",
                    formatter.is_amount_less_than_rounding_error(amount, &code)
                ),
                MoneyCommands::Currencies => {
                    println!("{}", serde_json::to_string_pretty(&table::all())?)
                }
            }
        }

        Commands::Auth { action } => match action {
            AuthCommands::Login { email, password } => {
                match client.login(&email, &password).await? {
                    AuthResponse::Token { token } => println!("{}", token),
                    AuthResponse::Redirect { location } => {
                        println!("Continue authentication at {}", location)
                    }
                }
            }
            AuthCommands::SignUp {
                email,
                password,
                name,
            } => {
                let token = client.sign_up(&email, &password, &name).await?;
                println!("{}", token);
            }
            AuthCommands::Logout => {
                client.logout().await?;
                println!("✓ Logged out");
            }
            AuthCommands::ResetPassword { email } => {
                client.reset_password(&email).await?;
                println!("✓ If the account exists, a reset email is on its way");
            }
            AuthCommands::UpdatePassword {
                reset_token,
                password,
            } => {
                client.update_password(&reset_token, &password).await?;
                println!("✓ Password updated");
            }
        },

        Commands::Register { form, ci, tax_id } => {
            let raw = std::fs::read_to_string(&form)
                .with_context(|| format!("Failed to read {}", form.display()))?;
            let registration: VendorRegistration = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid registration form {}", form.display()))?;

            let ci = UploadFile::from_path(&ci).await?;
            let tax = match tax_id {
                Some(path) => Some(UploadFile::from_path(&path).await?),
                None => None,
            };

            let request = client
                .register_vendor(registration, &ci, tax.as_ref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&request)?);
            println!("✓ Registration submitted.");
            println!("An administrator may need to approve the store before you can log in.");
        }

        Commands::Upload { path, prefix } => {
            let file = UploadFile::from_path(&path).await?;
            let result = client.upload_image(&file, prefix).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Support { action } => match action {
            SupportCommands::Threads => {
                let threads = client.list_threads().await?;
                println!("{}", serde_json::to_string_pretty(&threads)?);
            }
            SupportCommands::Messages { thread } => match thread {
                Some(id) => {
                    let messages = client.list_messages(&ThreadId::new(id)).await?;
                    messages.iter().for_each(print_message);
                }
                None => match client.active_conversation().await? {
                    Some(conversation) => print_conversation(&conversation),
                    None => println!("{NO_THREADS_HINT}"),
                },
            },
            SupportCommands::Open { body } => {
                let thread = client.create_thread(&MessageDraft::new(body)?).await?;
                println!("{}", serde_json::to_string_pretty(&thread)?);
            }
            SupportCommands::Send { body } => {
                let draft = MessageDraft::new(body)?;
                match client.reply(&draft).await? {
                    Some(thread_id) => println!("✓ Sent to {}", thread_id),
                    None => println!("{NO_THREADS_HINT}"),
                }
            }
            SupportCommands::Watch { interval } => watch(&client, interval).await?,
        },
    }

    Ok(())
}

/// Polls the active conversation until interrupted, printing unseen messages.
async fn watch(client: &VendorClient, interval: u64) -> Result<()> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));

    // One listener for the whole loop, raced against both the wait and the fetch.
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            _ = ticker.tick() => {}
        }

        let refreshed = tokio::select! {
            _ = &mut ctrl_c => break,
            result = client.active_conversation() => result,
        };

        match refreshed {
            Ok(Some(conversation)) => {
                for message in &conversation.messages {
                    if seen.insert(message.id.clone()) {
                        print_message(message);
                    }
                }
            }
            Ok(None) => tracing::debug!("No support threads yet"),
            Err(e) => tracing::warn!(error = %e, "Failed to refresh messages"),
        }
    }

    Ok(())
}
