use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;
use txinsight::application::query::QueryEngine;
use txinsight::domain::ports::TransactionSourceBox;
use txinsight::domain::transaction::Transaction;
use txinsight::infrastructure::json_file::{DEFAULT_INPUT, JsonFileSource};
use txinsight::interfaces::csv::transaction_writer::TransactionWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input transactions JSON file
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Command {
    /// Sum of the amounts of all transactions with a solved issue
    TotalAmount,
    /// Sum of the solved amounts sent by a client
    TotalAmountSentBy { name: String },
    /// Highest amount among transactions with a solved issue
    MaxAmount,
    /// Number of distinct clients that sent or received a transaction
    CountUniqueClients,
    /// Whether a client has at least one open compliance issue
    HasOpenComplianceIssue { name: String },
    /// Transactions indexed by beneficiary name
    TransactionsByBeneficiary,
    /// Identifiers of all open compliance issues
    UnsolvedIssueIds,
    /// Messages of all solved issues
    SolvedIssueMessages,
    /// The 3 transactions with the highest amount
    #[command(name = "top3-by-amount")]
    Top3ByAmount,
    /// Sender of the largest transaction
    TopSender,
    /// Solved amounts summed per sender
    TotalsBySender,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let cli = Cli::parse();

    run(cli).into_diagnostic()
}

fn run(cli: Cli) -> txinsight::error::Result<()> {
    let source: TransactionSourceBox = Box::new(JsonFileSource::new(&cli.input));
    let transactions = source.load()?;
    let engine = QueryEngine::new(&transactions);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let format = cli.format;

    match cli.command {
        Command::TotalAmount => write_value(format, &mut out, engine.total_amount()?),
        Command::TotalAmountSentBy { name } => {
            write_value(format, &mut out, engine.total_amount_sent_by(&name)?)
        }
        Command::MaxAmount => write_value(format, &mut out, engine.max_amount()?),
        Command::CountUniqueClients => {
            write_value(format, &mut out, engine.count_unique_clients())
        }
        Command::HasOpenComplianceIssue { name } => {
            write_value(format, &mut out, engine.has_open_compliance_issue(&name))
        }
        Command::TransactionsByBeneficiary => {
            let by_beneficiary: BTreeMap<&str, &Transaction> =
                engine.transactions_by_beneficiary().into_iter().collect();
            match format {
                Format::Json => write_json(&mut out, &by_beneficiary),
                Format::Csv => {
                    TransactionWriter::new(&mut out).write_transactions(by_beneficiary.into_values())
                }
            }
        }
        Command::UnsolvedIssueIds => {
            let mut ids: Vec<u64> = engine.unsolved_issue_ids().into_iter().collect();
            ids.sort_unstable();
            write_values(format, &mut out, ids)
        }
        Command::SolvedIssueMessages => {
            write_values(format, &mut out, engine.solved_issue_messages())
        }
        Command::Top3ByAmount => {
            let top = engine.top3_by_amount();
            match format {
                Format::Json => write_json(&mut out, &top),
                Format::Csv => TransactionWriter::new(&mut out).write_transactions(top),
            }
        }
        Command::TopSender => write_value(format, &mut out, engine.top_sender()?),
        Command::TotalsBySender => {
            let totals = engine.totals_by_sender()?;
            match format {
                Format::Json => write_json(&mut out, &totals),
                Format::Csv => TransactionWriter::new(&mut out).write_sender_totals(totals),
            }
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> txinsight::error::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_value<W, T>(format: Format, out: &mut W, value: T) -> txinsight::error::Result<()>
where
    W: Write,
    T: Serialize + Display,
{
    match format {
        Format::Json => write_json(out, &value),
        Format::Csv => TransactionWriter::new(out).write_values([value]),
    }
}

fn write_values<W, T>(format: Format, out: &mut W, values: Vec<T>) -> txinsight::error::Result<()>
where
    W: Write,
    T: Serialize + Display,
{
    match format {
        Format::Json => write_json(out, &values),
        Format::Csv => TransactionWriter::new(out).write_values(values),
    }
}

