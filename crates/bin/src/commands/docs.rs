//! Document management commands.

use crate::cli::DocsListArgs;
use crate::output::{OutputFormat, print_json, print_table};
use folio::DocumentStore;

/// Run the `docs list` command
pub async fn list(
    args: &DocsListArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = DocumentStore::open(&args.stores.data_dir).await?;
    let documents = store.list_info().await?;

    match format {
        OutputFormat::Human => {
            if documents.is_empty() {
                println!("No documents found.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = documents
                .iter()
                .map(|doc| {
                    let modified = doc
                        .modified
                        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                        .unwrap_or_else(|| "-".to_string());
                    vec![doc.name.clone(), doc.size.to_string(), modified]
                })
                .collect();
            print_table(&["NAME", "SIZE", "MODIFIED"], &rows);
        }
        OutputFormat::Json => {
            let entries: Vec<_> = documents
                .iter()
                .map(|doc| {
                    serde_json::json!({
                        "name": doc.name,
                        "size": doc.size,
                        "modified": doc.modified.map(|t| t.to_rfc3339()),
                    })
                })
                .collect();
            print_json(&entries)?;
        }
    }

    Ok(())
}
