use crate::cli::{confirm, open_store};
use crate::error::Result;
use crate::store::Store;

pub fn run(yes: bool) -> Result<()> {
    let (store, session) = open_store()?;
    if !confirm(
        &format!(
            "Delete every account and transaction for profile \"{}\"? Recurring bills and categories are kept.",
            session.user_id
        ),
        yes,
    ) {
        println!("Cancelled.");
        return Ok(());
    }
    store.clear_all(&session)?;
    println!("Cleared.");
    Ok(())
}
