mod detect;
mod find;
mod rate;
mod samples;
mod save;
mod saved;
mod subs;

pub use detect::run_detect;
pub use find::run_find;
pub use rate::run_rate;
pub use samples::run_samples;
pub use save::run_save;
pub use saved::run_saved;
pub use subs::run_subs;

use srf_lib::{map_api_error, FileStore, RecipeApiClient, RecipeStore, Result};

use crate::settings::ResolvedSettings;

pub(crate) fn build_client(settings: &ResolvedSettings) -> Result<RecipeApiClient> {
    RecipeApiClient::with_base_url(settings.base_url.clone(), settings.timeout)
        .map_err(map_api_error)
}

pub(crate) fn open_store(settings: &ResolvedSettings) -> RecipeStore<FileStore> {
    RecipeStore::new(FileStore::new(settings.store_path.clone()))
}
