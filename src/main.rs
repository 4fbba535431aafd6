//! NACHA Batch CLI
//!
//! Reads payment entries from CSV and prints the rendered ACH batch.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- entries.csv --company-name "ACME CORP" --company-id 1234567890 \
//!     --originating-dfi 09101298 --batch-number 1 > batch.ach
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use clap::Parser;
use nacha_batch::{read_entries, Batch, BatchHeader, Result};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

/// Render an ACH batch from a CSV of payment entries
#[derive(Parser, Debug)]
#[command(name = "nacha-batch")]
#[command(about = "Render an ACH batch from a CSV of payment entries", long_about = None)]
struct Cli {
    /// Input CSV file with one payment entry per row
    #[arg(value_name = "INPUT")]
    input_file: PathBuf,

    /// Originating company name
    #[arg(long, default_value = "")]
    company_name: String,

    /// Originating company identification
    #[arg(long, default_value = "")]
    company_id: String,

    /// First eight digits of the originating bank's routing number
    #[arg(long = "originating-dfi", value_name = "DFI_ID", default_value = "0")]
    originating_dfi_id: String,

    /// Batch number within the file
    #[arg(long, default_value_t = 1)]
    batch_number: u32,

    /// Standard entry class code
    #[arg(long = "entry-class", value_name = "SEC", default_value = "PPD")]
    standard_entry_class_code: String,

    /// Company entry description, e.g. PAYROLL
    #[arg(long = "description", default_value = "")]
    company_entry_description: String,

    /// Effective entry date as YYMMDD
    #[arg(long, value_name = "YYMMDD", default_value = "")]
    effective_date: String,
}

impl Cli {
    /// Copies the header options onto a batch header.
    fn apply_header(&self, header: &mut BatchHeader) -> Result<()> {
        header
            .set_company_name(&self.company_name)
            .set_company_id(&self.company_id)
            .set_standard_entry_class_code(&self.standard_entry_class_code)
            .set_company_entry_description(&self.company_entry_description)
            .set_effective_entry_date(&self.effective_date)
            .set_originating_dfi_id(self.originating_dfi_id.as_str())?
            .set_batch_number(self.batch_number)?;
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file = File::open(&cli.input_file)?;
    let reader = BufReader::new(file);

    let mut batch = Batch::new();
    cli.apply_header(batch.header_mut())?;
    read_entries(reader, &mut batch)?;

    let text = batch.render()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", text)?;

    Ok(())
}
