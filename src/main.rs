mod entry;
mod interactive;
mod logger;

use issue_loadtest::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
