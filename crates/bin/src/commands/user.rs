//! User management commands.

use folio::UserStore;

use crate::cli::UserAddArgs;

/// Run the `user add` command
///
/// The password doubles as its own confirmation; every other signup rule applies.
pub async fn add(args: &UserAddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = UserStore::open(&args.stores.users_file).await?;

    match store
        .sign_up(&args.username, &args.password, &args.password)
        .await
    {
        Ok(()) => {
            println!("{} added as user", args.username);
            Ok(())
        }
        Err(e) if e.is_validation_error() => {
            eprintln!("Could not add {}: {e}", args.username);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
