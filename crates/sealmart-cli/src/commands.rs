use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;

use sealmart_codec::{CodeSealer, HexSealer};
use sealmart_identity::StaticIdentityProvider;
use sealmart_registry::{RegistryReader, RegistryWriter};
use sealmart_review::{ReviewConfig, ReviewJob, ReviewVerdict};
use sealmart_state::Catalog;
use sealmart_store::InMemoryKeyValueStore;
use sealmart_types::{ExtensionRecord, ExtensionStatus, Identity, SubmissionDraft};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Demo(args) => cmd_demo(args).await,
        Command::Seal(args) => cmd_seal(args),
        Command::Unseal(args) => cmd_unseal(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

async fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let store = Arc::new(InMemoryKeyValueStore::new());
    let identity = Arc::new(StaticIdentityProvider::connected(Identity::new(
        args.identity.clone(),
    )));
    let reader = RegistryReader::new(store.clone());
    let writer = RegistryWriter::new(store, identity, Arc::new(HexSealer));

    reader.check_available().await?;
    println!("{} store reachable", "✓".green().bold());
    println!("  signer: {}", args.identity.cyan());

    // Two submissions from the connected identity.
    let drafts = [
        SubmissionDraft::new(
            "Dark Reader",
            "Inverts page colors for night reading",
            "appearance",
            "export function invert(page) { /* ... */ }",
        ),
        SubmissionDraft::new(
            "Tab Wrangler",
            "Closes tabs you forgot about",
            "productivity",
            "export function wrangle(tabs) { /* ... */ }",
        ),
    ];
    let mut ids = Vec::new();
    for draft in &drafts {
        let id = writer.submit(draft).await?;
        println!(
            "{} submitted {} as {}",
            "✓".green().bold(),
            draft.name.bold(),
            id.short_id().yellow()
        );
        ids.push(id);
    }

    // Review the first submission to verification, reject the second.
    let config = ReviewConfig {
        analysis_delay: Duration::from_millis(args.review_ms),
    };
    for (id, verdict) in ids.iter().zip([ReviewVerdict::Approve, ReviewVerdict::Reject]) {
        println!(
            "  reviewing {} ({:?})...",
            id.short_id().yellow(),
            verdict
        );
        let (job, _cancel) = ReviewJob::spawn(writer.clone(), id.clone(), verdict, config);
        let state = job.wait().await;
        println!("  {} {:?}", "→".bold(), state);
    }

    // Enumerate and show the catalog, then a filtered view of it.
    let catalog = Catalog::new(reader.load_all().await);
    println!("\n{}", "Catalog (newest first):".bold());
    for record in catalog.current_page() {
        print_record(record);
    }

    let verified = catalog
        .clone()
        .with_status_filter(Some(ExtensionStatus::Verified));
    println!("\n{}", "Verified only:".bold());
    for record in verified.current_page() {
        print_record(record);
    }

    Ok(())
}

fn print_record(record: &ExtensionRecord) {
    let status = match record.status {
        ExtensionStatus::Pending => "pending".yellow(),
        ExtensionStatus::Verified => "verified".green(),
        ExtensionStatus::Rejected => "rejected".red(),
    };
    let when = chrono::DateTime::from_timestamp(record.timestamp as i64, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| record.timestamp.to_string());
    println!(
        "  {} {} [{}] {} — {} ({})",
        record.id.short_id().yellow(),
        record.name.bold(),
        record.category,
        status,
        record.description,
        when.dimmed()
    );
}

fn cmd_seal(args: SealArgs) -> anyhow::Result<()> {
    println!("{}", HexSealer.seal(&args.source));
    Ok(())
}

fn cmd_unseal(args: UnsealArgs) -> anyhow::Result<()> {
    println!("{}", HexSealer.unseal(&args.sealed)?);
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let draft = SubmissionDraft::new(args.name, args.description, args.category, args.source);
    match draft.validate() {
        Ok(()) => {
            println!("{} draft is submittable", "✓".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e);
            Err(e.into())
        }
    }
}
