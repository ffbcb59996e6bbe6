//! Instance info command - shows storage locations and document/user counts.

use crate::cli::InfoArgs;
use crate::output::{OutputFormat, print_json};
use crate::stores::open_stores;

/// Run the info command
pub async fn run(args: &InfoArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let stores = open_stores(&args.stores).await?;

    let data_dir = stores.documents.root().display().to_string();
    let users_file = stores.users.path().display().to_string();
    let documents = stores.documents.count().await?;
    let users = stores.users.count().await?;

    match format {
        OutputFormat::Human => {
            println!("Data dir:    {data_dir}");
            println!("Users file:  {users_file}");
            println!("Documents:   {documents}");
            println!("Users:       {users}");
        }
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "data_dir": data_dir,
                "users_file": users_file,
                "documents": documents,
                "users": users,
            }))?;
        }
    }

    Ok(())
}
