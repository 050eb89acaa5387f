use colored::Colorize;

use crate::db::{init_db, seed_categories};
use crate::error::Result;
use crate::settings::{load_settings, save_settings};
use crate::store::Session;

pub fn run(data_dir: Option<String>, profile: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = dir;
    }
    if let Some(profile) = profile {
        settings.profile = profile;
    }
    save_settings(&settings)?;

    let dir = std::path::PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&dir)?;
    let conn = crate::db::get_connection(&dir.join("satang.db"))?;
    init_db(&conn)?;
    let session = Session::new(settings.profile.clone());
    seed_categories(&conn, &session.user_id)?;

    println!(
        "{} data in {}, profile {}",
        "Initialized:".green().bold(),
        settings.data_dir,
        settings.profile
    );
    Ok(())
}
