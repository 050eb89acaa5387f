use crate::cli::open_store;
use crate::error::Result;
use crate::store::Store;

pub fn add(name: &str) -> Result<()> {
    let (store, session) = open_store()?;
    store.add_category(&session, name)?;
    println!("Added category: {name}");
    Ok(())
}

pub fn list() -> Result<()> {
    let (store, session) = open_store()?;
    for name in store.categories(&session)? {
        println!("{name}");
    }
    Ok(())
}
