use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use solid_capabilities::application::notification::InvestorNotifier;
use solid_capabilities::application::payment::PaymentService;
use solid_capabilities::application::user::{UserController, UserNotificationService, UserService};
use solid_capabilities::composition::{self, CONSOLE_MAILER};
use solid_capabilities::domain::investor::Investor;
use solid_capabilities::domain::payment::Amount;
use solid_capabilities::domain::ports::SharedAvm;
use solid_capabilities::domain::user::UserRequest;
use solid_capabilities::infrastructure::avm::TableAvm;
use solid_capabilities::infrastructure::in_memory::InMemoryUserRepository;
use solid_capabilities::interfaces::csv::property_reader::PropertyReader;
use solid_capabilities::interfaces::csv::report_writer::ReportWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter directive, e.g. `info` or `solid_capabilities=debug`
    #[arg(long, global = true, env = "SOLID_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a user and send the welcome email
    CreateUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Email service to use
        #[arg(long, env = "SOLID_MAILER", default_value = CONSOLE_MAILER)]
        mailer: String,
    },
    /// Charge an amount through a payment method
    Pay {
        /// Payment method name (credit-card, crypto)
        #[arg(long)]
        method: String,
        #[arg(long)]
        amount: Decimal,
        /// Card number or wallet address, depending on the method
        #[arg(long)]
        credential: String,
    },
    /// Send a message to an investor
    Notify {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        message: String,
        /// Email service to use
        #[arg(long, env = "SOLID_MAILER", default_value = CONSOLE_MAILER)]
        mailer: String,
    },
    /// Value a portfolio CSV (kind,address,area,sold_price)
    Valuate {
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::CreateUser {
            name,
            email,
            password,
            mailer,
        } => {
            let email_service = composition::email_services()
                .into_diagnostic()?
                .resolve(&mailer, &())
                .into_diagnostic()?;

            let controller = UserController::new(
                UserService::new(Box::new(InMemoryUserRepository::new())),
                UserNotificationService::new(email_service),
            );
            let request = UserRequest {
                name,
                email,
                password,
            };
            let response = controller.create_user(&request).await.into_diagnostic()?;
            println!("{}", serde_json::to_string(&response).into_diagnostic()?);
        }
        Command::Pay {
            method,
            amount,
            credential,
        } => {
            let method = composition::payment_methods()
                .into_diagnostic()?
                .resolve(&method, &credential)
                .into_diagnostic()?;
            let amount = Amount::new(amount).into_diagnostic()?;

            let receipt = PaymentService::new()
                .process(method.as_ref(), amount)
                .await
                .into_diagnostic()?;
            println!("{},{},{}", receipt.reference, receipt.method, receipt.amount);
        }
        Command::Notify {
            email,
            name,
            message,
            mailer,
        } => {
            let email_service = composition::email_services()
                .into_diagnostic()?
                .resolve(&mailer, &())
                .into_diagnostic()?;
            let investor = Investor::new(name, &email).into_diagnostic()?;

            InvestorNotifier::new(email_service)
                .notify(&investor, &message)
                .await
                .into_diagnostic()?;
        }
        Command::Valuate { input } => {
            let avm: SharedAvm = Arc::new(TableAvm::barcelona());

            let file = File::open(input).into_diagnostic()?;
            let (portfolio, skipped) = PropertyReader::new(file).load(&avm);
            for e in skipped {
                eprintln!("Error reading property: {}", e);
            }

            let report = portfolio.report().into_diagnostic()?;
            let stdout = io::stdout();
            let mut writer = ReportWriter::new(stdout.lock());
            writer.write_report(&report).into_diagnostic()?;
        }
    }

    Ok(())
}
