use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use certsmith::listing::export_filename;
use certsmith::pipeline::{Generator, StatusEvent};
use certsmith::{ProviderConfig, RawInput};

/// Generate five certificate layout variants from a small set of facts,
/// optionally enriching the wording via a remote text generator.
#[derive(Parser, Debug)]
#[command(name = "certsmith", version, about)]
struct Args {
    /// Certificate category, e.g. "Python Mastery"
    #[arg(long)]
    category: Option<String>,

    /// Recipient name
    #[arg(long)]
    recipient: Option<String>,

    /// Issuing organization
    #[arg(long)]
    organization: Option<String>,

    /// Issue date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<String>,

    /// OpenRouter API key; enrichment is skipped without one
    #[arg(long, env = "OPENROUTER_API_KEY", default_value = "")]
    api_key: String,

    /// Model identifier for the enrichment request
    #[arg(long)]
    model: Option<String>,

    /// Write each variant's source listing into this directory
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the full source listing for every variant
    #[arg(long)]
    show_listings: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = ProviderConfig::default();
    if let Some(model) = args.model {
        config.model = model;
    }

    let input = RawInput {
        category_name: args.category.unwrap_or_default(),
        recipient_name: args.recipient.unwrap_or_default(),
        organization_name: args.organization.unwrap_or_default(),
        date_issued: args.date,
        api_key: args.api_key,
    };

    let mut generator = Generator::new(config);
    generator.on_status(|event| match event {
        StatusEvent::Enhancing => eprintln!("Enhancing designs..."),
        StatusEvent::Enhanced => eprintln!("Enhancements applied."),
        StatusEvent::EnhancementFailed(reason) => {
            eprintln!("Enhancement unavailable ({reason}); using default designs.")
        }
        StatusEvent::FieldsDefaulted => {
            eprintln!("Some fields are empty. Default values will be used for missing information.")
        }
    });

    let outcome = generator.run(input);

    println!(
        "Generated {} designs for {:?} ({})",
        outcome.certificates.len(),
        outcome.record.category_name,
        outcome.record.formatted_date()
    );

    for cert in &outcome.certificates {
        println!(
            "\nDesign {}: {} [{} instructions]",
            cert.variant.index() + 1,
            cert.display_name,
            cert.commands.len()
        );
        println!("  {}", cert.summary);
        if args.show_listings {
            println!("\n{}", cert.listing);
        }
    }

    if let Some(dir) = args.out_dir {
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating output directory {:?}", dir))?;
        for cert in &outcome.certificates {
            let name = export_filename(
                &outcome.record.category_name,
                cert.variant.index(),
                "js",
            );
            let path = dir.join(name);
            fs::write(&path, &cert.listing)
                .with_context(|| format!("writing listing {:?}", path))?;
            println!("Wrote {:?}", path);
        }
    }

    Ok(())
}
