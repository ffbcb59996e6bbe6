//! Store creation shared by the server and the management commands.

use folio::{DocumentStore, UserStore};

use crate::cli::StoreArgs;

/// The two flat-file stores Folio works against
#[derive(Debug, Clone)]
pub struct Stores {
    pub documents: DocumentStore,
    pub users: UserStore,
}

/// Open the document directory and credentials file named by `args`
///
/// Both are created if missing.
pub async fn open_stores(args: &StoreArgs) -> Result<Stores, Box<dyn std::error::Error>> {
    let documents = DocumentStore::open(&args.data_dir).await?;
    tracing::info!("Using documents in {}", args.data_dir.display());

    let users = UserStore::open(&args.users_file).await?;
    tracing::info!("Using credentials file {}", args.users_file.display());

    Ok(Stores { documents, users })
}
